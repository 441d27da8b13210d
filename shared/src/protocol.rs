use crate::{
    AuthResponse, ClassroomSummary, Lesson, LessonDraft, LoginRequest, RegisterRequest,
    ZoomJoinInfo,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the bearer credential.
    const AUTHENTICATED: bool = true;

    /// Path with any ids filled in. Most endpoints are static.
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::PATH)
    }

    /// Whether the request sends `self` as a JSON body.
    fn has_body(&self) -> bool {
        matches!(Self::METHOD, HttpMethod::Post | HttpMethod::Put)
    }
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

/// Server-rendered dashboard fragment
#[derive(Debug, Serialize)]
pub struct DashboardRequest;

impl ApiRequest for DashboardRequest {
    type Response = String;
    const PATH: &'static str = "/api/dashboard";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List the caller's lessons
#[derive(Debug, Serialize)]
pub struct ListLessonsRequest;

impl ApiRequest for ListLessonsRequest {
    type Response = Vec<Lesson>;
    const PATH: &'static str = "/api/lesson";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for LessonDraft {
    type Response = Lesson;
    const PATH: &'static str = "/api/lesson";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List the caller's classrooms
#[derive(Debug, Serialize)]
pub struct ListClassroomsRequest;

impl ApiRequest for ListClassroomsRequest {
    type Response = Vec<ClassroomSummary>;
    const PATH: &'static str = "/api/classroom";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Student asks the teacher to open a meeting. Only 201 counts as success.
#[derive(Debug, Serialize)]
pub struct MeetingRequest {
    #[serde(skip)]
    pub classroom_id: Uuid,
}

impl ApiRequest for MeetingRequest {
    type Response = ();
    const PATH: &'static str = "/api/classroom/{id}/meeting-requests";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/classroom/{}/meeting-requests", self.classroom_id))
    }

    fn has_body(&self) -> bool {
        false
    }
}

#[derive(Debug, Serialize)]
pub struct ZoomJoinRequest {
    #[serde(skip)]
    pub classroom_id: Uuid,
}

impl ApiRequest for ZoomJoinRequest {
    type Response = ZoomJoinInfo;
    const PATH: &'static str = "/api/classroom/{id}/zoom/join";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/classroom/{}/zoom/join", self.classroom_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_paths() {
        let id = Uuid::nil();
        let req = MeetingRequest { classroom_id: id };
        assert_eq!(
            req.path(),
            "/api/classroom/00000000-0000-0000-0000-000000000000/meeting-requests"
        );
        assert!(!req.has_body());

        let join = ZoomJoinRequest { classroom_id: id };
        assert!(join.path().ends_with("/zoom/join"));
        assert_eq!(ListLessonsRequest.path(), "/api/lesson");
    }

    #[test]
    fn test_auth_endpoints_are_anonymous() {
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(!RegisterRequest::AUTHENTICATED);
        assert!(DashboardRequest::AUTHENTICATED);
    }
}

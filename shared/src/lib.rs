use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod date;
pub mod protocol;

pub use chrono;
pub use uuid;

use chrono::{DateTime, Utc};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 浏览器持久化存储中的键名
pub const STORAGE_KEY_TOKEN: &str = "authToken";
pub const STORAGE_KEY_USER: &str = "currentUser";
pub const STORAGE_KEY_THEME: &str = "theme";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Teacher,
    Admin,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
            UserType::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// 登录/注册时服务端返回的用户快照
///
/// 只在重新认证时刷新，客户端不会修改它。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
}

impl UserProfile {
    /// 头部与个人菜单中显示的全名
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// 头像缩写，例如 "Ada Lovelace" -> "AL"
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub classroom_id: Uuid,
    pub teacher_id: Uuid,
    pub title: String,
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    pub is_active: bool,
    pub chat_closed: bool,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    /// 是否仍在给定时间点之后（严格大于）
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_at > now
    }
}

/// 新建课程的请求体
///
/// 与 `Lesson` 同形，id 由客户端生成；提交后以服务端返回的数据为准。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub id: Uuid,
    pub classroom_id: Uuid,
    pub teacher_id: Uuid,
    pub title: String,
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    pub is_active: bool,
    pub chat_closed: bool,
    pub created_at: DateTime<Utc>,
}

impl LessonDraft {
    pub fn new(
        classroom_id: Uuid,
        teacher_id: Uuid,
        title: String,
        description: String,
        scheduled_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            classroom_id,
            teacher_id,
            title,
            description,
            scheduled_at,
            is_active: true,
            chat_closed: false,
            created_at,
        }
    }
}

/// 教室下拉框只需要 id 与名称，其余字段忽略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoomJoinInfo {
    #[serde(default)]
    pub join_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str) -> UserProfile {
        UserProfile {
            id: Uuid::nil(),
            email: "t@example.com".into(),
            first_name: first.into(),
            last_name: last.into(),
            user_type: UserType::Teacher,
        }
    }

    #[test]
    fn test_initials_and_display_name() {
        let p = profile("ada", "lovelace");
        assert_eq!(p.initials(), "AL");
        assert_eq!(p.display_name(), "ada lovelace");
    }

    #[test]
    fn test_initials_skip_missing_parts() {
        assert_eq!(profile("", "smith").initials(), "S");
        assert_eq!(profile("", "").initials(), "");
    }

    #[test]
    fn test_user_type_display_matches_wire_name() {
        assert_eq!(UserType::Student.to_string(), "student");
        assert_eq!(UserType::Teacher.to_string(), "teacher");
    }
}

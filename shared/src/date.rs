//! 课程时间工具
//!
//! - `parse_schedule_input`: 解析表单里填写的上课时间
//! - `format_schedule`: 列表卡片上显示的时间文本

use chrono::{DateTime, NaiveDateTime, Utc};

/// `<input type="datetime-local">` 产生的格式（无时区、可带秒）
const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// 解析上课时间
///
/// 先尝试 RFC 3339，再尝试 datetime-local 格式（按 UTC 解释）。
/// 返回 None 如果都无法解析
pub fn parse_schedule_input(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[inline]
pub fn format_schedule(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_local() {
        let dt = parse_schedule_input("2026-10-20T09:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 10, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_schedule_input("2026-10-20T11:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 10, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_schedule_input("").is_none());
        assert!(parse_schedule_input("   ").is_none());
        assert!(parse_schedule_input("next tuesday").is_none());
    }

    #[test]
    fn test_format_schedule() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 0).unwrap();
        assert_eq!(format_schedule(&dt), "2026-01-02 03:04 UTC");
    }
}

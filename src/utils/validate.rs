//! 请求字段校验工具

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("invalid email regex")
});

static ROLL_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{1,32}$").expect("invalid roll number regex"));

/// 校验邮箱格式
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 校验学号格式：字母、数字、连字符，至多32位
pub fn is_valid_roll_number(roll_number: &str) -> bool {
    ROLL_NUMBER_REGEX.is_match(roll_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("teacher@school.edu"));
        assert!(is_valid_email("a.b+c@example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_roll_numbers() {
        assert!(is_valid_roll_number("S-2024-001"));
        assert!(is_valid_roll_number("42"));
        assert!(!is_valid_roll_number(""));
        assert!(!is_valid_roll_number("roll number with spaces"));
    }
}

//! Shared detection patterns for validation predicates.
//!
//! Regexes are compiled once and reused by `ValidationState` and by callers
//! that want the raw checks without status tracking.

use lazy_static::lazy_static;
use regex::Regex;

/// URLs longer than this are rejected outright (practical browser limit).
const MAX_URL_LEN: usize = 2083;

lazy_static! {
    /// Absolute http/https/ftp URL: optional userinfo, a registered name,
    /// IPv4 address or localhost, optional port, optional path/query/fragment.
    pub static ref URL_PATTERN: Regex = Regex::new(
        r"(?i)^(?:https?|ftp)://(?:\S+(?::\S*)?@)?(?:localhost|\d{1,3}(?:\.\d{1,3}){3}|[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,})(?::\d{2,5})?(?:[/?#]\S*)?$"
    ).unwrap();

    /// Email address (RFC 5322 simplified), anchored to the whole string.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

/// Check if the given string is a well-formed absolute URL.
pub fn is_url(value: &str) -> bool {
    !value.is_empty() && value.len() < MAX_URL_LEN && URL_PATTERN.is_match(value)
}

/// Check if the given string is a well-formed email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_url("http://google.com"));
        assert!(is_url("https://www.example.com:8080/path?q=1#frag"));
        assert!(is_url("ftp://files.mydomain.org/pub"));
        assert!(is_url("http://localhost:3000"));
        assert!(is_url("http://192.168.0.1/admin"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_url(""));
        assert!(!is_url("google.com"));
        assert!(!is_url("http://"));
        assert!(!is_url("mailto:someone@example.com"));
        assert!(!is_url("just some words"));
        assert!(!is_url(&format!("http://example.com/{}", "a".repeat(3000))));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_email("someone@example.com"));
        assert!(is_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_email(""));
        assert!(!is_email("not an email"));
        assert!(!is_email("missing@tld"));
        assert!(!is_email("wrapped someone@example.com wrapped"));
    }
}

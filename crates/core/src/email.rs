//! Email address shape check for contact forms

use std::sync::LazyLock;

use regex::Regex;

/// Non-space local part, `@`, non-space domain, `.`, lowercase TLD of 2+ letters
const EMAIL_PATTERN: &str = r"^[^ ]+@[^ ]+\.[a-z]{2,}$";

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Returns `true` if `email` looks like an address.
///
/// The TLD check is case-sensitive, so `a@b.COM` is rejected. Only the
/// space character is excluded from the local part and domain; tabs and
/// other whitespace pass.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("me+tag@mail.example.org"));
    }

    #[test]
    fn test_rejects_single_letter_tld() {
        assert!(!is_valid_email("a@b.c"));
    }

    #[test]
    fn test_rejects_uppercase_tld() {
        assert!(!is_valid_email("a@b.COM"));
        assert!(!is_valid_email("a@b.Com"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("ab.com"));
    }

    #[test]
    fn test_rejects_spaces() {
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("ab@c d.de"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn test_permissive_local_part() {
        // Only the shape is checked, not RFC 5322
        assert!(is_valid_email("a@@b.co"));
        assert!(is_valid_email("a@b.c.de"));
    }

    #[test]
    fn test_tld_must_end_the_string() {
        assert!(!is_valid_email("a@b.co1"));
        assert!(!is_valid_email("a@b.co "));
    }
}

//! Email address format rules.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$").expect("valid email regex")
});

/// Returns whether `value` is a well-formed email address.
///
/// Local part: one or more of `[A-Za-z0-9+_.-]`. Domain: dot-separated
/// labels ending in an alphabetic label of at least two characters. The
/// whole input must match; surrounding whitespace is rejected.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns the substring after the first `@`, or `None` when absent.
pub fn email_domain(value: &str) -> Option<&str> {
    value.split_once('@').map(|(_, domain)| domain)
}

#[cfg(test)]
mod tests {
    use super::{email_domain, is_valid_email};

    #[test]
    fn accepts_common_addresses() {
        for value in [
            "alice@loglass.co.jp",
            "a@b.co",
            "first.last+tag@mail.example.com",
            "under_score-dash@x-y.io",
        ] {
            assert!(is_valid_email(value), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in [
            "",
            "invalid-email",
            "bad-format",
            "@loglass.co.jp",
            "alice@",
            "alice@loglass",
            "alice@loglass.c",
            "alice@loglass.c0",
            "alice@@loglass.co.jp",
            "ali ce@loglass.co.jp",
            " alice@loglass.co.jp",
            "alice@loglass.co.jp ",
            "alice@loglass.co.jp\n",
        ] {
            assert!(!is_valid_email(value), "{value:?} should be invalid");
        }
    }

    #[test]
    fn email_domain_splits_at_first_at_sign() {
        assert_eq!(email_domain("alice@loglass.co.jp"), Some("loglass.co.jp"));
        assert_eq!(email_domain("no-at-sign"), None);
    }
}

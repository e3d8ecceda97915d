//! User domain model.
//!
//! # Responsibility
//! - Define the user record and its membership classification.
//! - Own the classification and employee-delta rules used by email changes.
//!
//! # Invariants
//! - `user_id` is stable and never reassigned to another user.
//! - After a completed email change, `user_type` matches whether the email
//!   domain equals the company domain.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque stable user identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = String;

/// Membership classification derived from the email domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// Email domain equals the company domain.
    Employee,
    /// Any other email domain.
    Customer,
}

impl UserType {
    /// Stable string id used in serialized records and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Classifies an email domain against the company domain.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn classify(email_domain: &str, company_domain: &str) -> Self {
        if email_domain == company_domain {
            Self::Employee
        } else {
            Self::Customer
        }
    }

    /// Returns the employee-count change for a transition `from -> to`.
    ///
    /// - unchanged type -> `0`
    /// - customer to employee -> `+1`
    /// - employee to customer -> `-1`
    pub fn employee_delta(from: Self, to: Self) -> i64 {
        match (from, to) {
            (Self::Customer, Self::Employee) => 1,
            (Self::Employee, Self::Customer) => -1,
            _ => 0,
        }
    }

    pub fn is_employee(self) -> bool {
        self == Self::Employee
    }
}

impl Display for UserType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub user_type: UserType,
    /// Passed through unchanged by email changes.
    pub is_email_confirmed: bool,
}

impl User {
    pub fn new(
        user_id: impl Into<UserId>,
        email: impl Into<String>,
        user_type: UserType,
        is_email_confirmed: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            user_type,
            is_email_confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserType;

    #[test]
    fn classify_matches_exact_domain_only() {
        assert_eq!(
            UserType::classify("loglass.co.jp", "loglass.co.jp"),
            UserType::Employee
        );
        assert_eq!(
            UserType::classify("example.com", "loglass.co.jp"),
            UserType::Customer
        );
        assert_eq!(
            UserType::classify("LOGLASS.co.jp", "loglass.co.jp"),
            UserType::Customer
        );
        assert_eq!(
            UserType::classify("sub.loglass.co.jp", "loglass.co.jp"),
            UserType::Customer
        );
    }

    #[test]
    fn employee_delta_is_zero_when_type_is_unchanged() {
        assert_eq!(
            UserType::employee_delta(UserType::Employee, UserType::Employee),
            0
        );
        assert_eq!(
            UserType::employee_delta(UserType::Customer, UserType::Customer),
            0
        );
    }

    #[test]
    fn employee_delta_tracks_direction() {
        assert_eq!(
            UserType::employee_delta(UserType::Customer, UserType::Employee),
            1
        );
        assert_eq!(
            UserType::employee_delta(UserType::Employee, UserType::Customer),
            -1
        );
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(UserType::Employee.to_string(), "EMPLOYEE");
        assert_eq!(UserType::Customer.to_string(), "CUSTOMER");
    }
}

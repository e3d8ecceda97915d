//! Company profile model.
//!
//! # Invariants
//! - Exactly one company record exists per store.
//! - `number_of_employees` is maintained incrementally by email changes and
//!   is never recomputed from the user table.

use serde::{Deserialize, Serialize};

/// Singleton company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Authoritative domain for employee classification.
    pub company_domain_name: String,
    /// Signed so that inconsistent fixture data can surface as a negative
    /// count instead of wrapping.
    pub number_of_employees: i64,
}

impl Company {
    pub fn new(company_domain_name: impl Into<String>, number_of_employees: i64) -> Self {
        Self {
            company_domain_name: company_domain_name.into(),
            number_of_employees,
        }
    }

    /// Returns a copy with the employee count shifted by `delta`.
    ///
    /// The domain is carried over unchanged. No clamping is applied.
    pub fn with_employee_delta(&self, delta: i64) -> Self {
        Self {
            company_domain_name: self.company_domain_name.clone(),
            number_of_employees: self.number_of_employees + delta,
        }
    }
}

//! Core domain logic for user email changes.
//! This crate is the single source of truth for membership classification
//! and the company employee counter.

pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::company::Company;
pub use model::email::{email_domain, is_valid_email};
pub use model::user::{User, UserId, UserType};
pub use notify::mailer::{Mailer, Notifier};
pub use repo::record_store::{InMemoryRecordStore, RecordStore};
pub use service::email_change_service::{EmailChangeError, EmailChangeResult, EmailChangeService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Outbound notification adapters.
//!
//! # Responsibility
//! - Define the notifier contract used after a successful email change.
//! - Provide a writer-backed mailer for the CLI and tests.

pub mod mailer;

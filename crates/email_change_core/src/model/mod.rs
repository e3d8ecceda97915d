//! Domain records for users and the company profile.
//!
//! # Responsibility
//! - Define typed records shared by the store, service and notifier layers.
//! - Hold pure classification rules with no storage or I/O dependencies.
//!
//! # Invariants
//! - Every user is identified by a stable `UserId`.
//! - The company record is a singleton; records are never deleted.

pub mod company;
pub mod email;
pub mod user;

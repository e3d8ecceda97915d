//! Record store abstractions and in-memory persistence.
//!
//! # Responsibility
//! - Define the storage contract consumed by the email change use-case.
//! - Keep record storage swappable without touching business rules.
//!
//! # Invariants
//! - The store owns record storage exclusively.
//! - The store holds no business logic; classification lives in `model`.

pub mod record_store;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store and notifier calls into use-case level APIs.
//! - Keep entry points decoupled from storage and delivery details.

pub mod email_change_service;

//! Email-changed notification contract and line-oriented mailer.
//!
//! # Invariants
//! - Notification is fire-and-forget; delivery failures never reach callers.

use log::{info, warn};
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// Receives email-changed notifications from the email change use-case.
pub trait Notifier {
    fn send_email_changed_message(&self, user_id: &str, new_email: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send_email_changed_message(&self, user_id: &str, new_email: &str) {
        (**self).send_email_changed_message(user_id, new_email)
    }
}

/// Notifier that writes one human-readable line per message to a sink.
pub struct Mailer<W: Write> {
    sink: RefCell<W>,
}

impl Mailer<Stdout> {
    /// Creates a mailer writing to process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Mailer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: RefCell::new(sink),
        }
    }

    /// Consumes the mailer and returns its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> Notifier for Mailer<W> {
    fn send_email_changed_message(&self, user_id: &str, new_email: &str) {
        let mut sink = self.sink.borrow_mut();
        let written = writeln!(
            sink,
            "Sending email changed message to {user_id} at {new_email}"
        )
        .and_then(|()| sink.flush());

        match written {
            Ok(()) => info!(
                "event=email_changed_notify module=notify status=ok user_id={}",
                user_id
            ),
            Err(err) => warn!(
                "event=email_changed_notify module=notify status=error user_id={} error={}",
                user_id, err
            ),
        }
    }
}

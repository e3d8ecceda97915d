//! Email change use-case service.
//!
//! # Responsibility
//! - Validate and apply a user's email change.
//! - Re-classify the user and keep the company employee counter in step.
//! - Notify only after both records are written.
//!
//! # Invariants
//! - Any error is raised before the first write: no partial mutation and no
//!   notification on failure.
//! - Changing to the current email is a no-op.
//! - The company is written before the user; both derive from one read.
//! - The employee counter moves only when the user type actually changes.

use crate::model::email::{email_domain, is_valid_email};
use crate::model::user::{User, UserId, UserType};
use crate::notify::mailer::Notifier;
use crate::repo::record_store::RecordStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EmailChangeResult<T> = Result<T, EmailChangeError>;

/// Errors from the email change use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailChangeError {
    /// Candidate email does not match the accepted address format.
    InvalidFormat(String),
    /// No user exists with the given id.
    NotFound(UserId),
}

impl Display for EmailChangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => write!(f, "invalid email format: {value}"),
            Self::NotFound(user_id) => write!(f, "user not found: {user_id}"),
        }
    }
}

impl Error for EmailChangeError {}

/// Use-case service over a record store and a notifier.
///
/// Holds no state between calls beyond its collaborators.
pub struct EmailChangeService<S: RecordStore, N: Notifier> {
    store: S,
    notifier: N,
}

impl<S: RecordStore, N: Notifier> EmailChangeService<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// Changes `user_id`'s email to `new_email` and re-classifies the user.
    ///
    /// # Errors
    /// - `InvalidFormat` when `new_email` is malformed (checked before lookup).
    /// - `NotFound` when `user_id` does not resolve.
    pub fn change_email(&self, user_id: &str, new_email: &str) -> EmailChangeResult<()> {
        if !is_valid_email(new_email) {
            info!(
                "event=email_change module=service status=error error_code=invalid_format user_id={}",
                user_id
            );
            return Err(EmailChangeError::InvalidFormat(new_email.to_string()));
        }

        let Some(user) = self.store.get_user_by_id(user_id) else {
            info!(
                "event=email_change module=service status=error error_code=not_found user_id={}",
                user_id
            );
            return Err(EmailChangeError::NotFound(user_id.to_string()));
        };

        if user.email == new_email {
            debug!(
                "event=email_change module=service status=skip reason=unchanged user_id={}",
                user_id
            );
            return Ok(());
        }

        let company = self.store.get_company();
        // Format validation guarantees exactly one `@`.
        let new_domain = email_domain(new_email).unwrap_or_default();
        let new_type = UserType::classify(new_domain, &company.company_domain_name);
        let delta = UserType::employee_delta(user.user_type, new_type);
        debug!(
            "event=email_classify module=service user_id={} domain={} from={} to={} delta={}",
            user_id, new_domain, user.user_type, new_type, delta
        );

        let new_company = company.with_employee_delta(delta);
        if new_company.number_of_employees < 0 {
            warn!(
                "event=employee_count_anomaly module=service user_id={} number_of_employees={}",
                user_id, new_company.number_of_employees
            );
        }
        self.store.save_company(&new_company);

        let new_user = User {
            email: new_email.to_string(),
            user_type: new_type,
            ..user
        };
        self.store.save_user(&new_user);

        self.notifier.send_email_changed_message(user_id, new_email);

        info!(
            "event=email_change module=service status=ok user_id={} user_type={} number_of_employees={}",
            user_id, new_type, new_company.number_of_employees
        );
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailChangeError, EmailChangeService};
    use crate::model::company::Company;
    use crate::model::user::{User, UserType};
    use crate::notify::mailer::Notifier;
    use crate::repo::record_store::{InMemoryRecordStore, RecordStore};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn send_email_changed_message(&self, user_id: &str, new_email: &str) {
            self.calls
                .borrow_mut()
                .push((user_id.to_string(), new_email.to_string()));
        }
    }

    fn service() -> EmailChangeService<InMemoryRecordStore, RecordingNotifier> {
        EmailChangeService::new(
            InMemoryRecordStore::with_fixture(),
            RecordingNotifier::default(),
        )
    }

    #[test]
    fn error_messages_name_the_offending_input() {
        assert_eq!(
            EmailChangeError::InvalidFormat("nope".to_string()).to_string(),
            "invalid email format: nope"
        );
        assert_eq!(
            EmailChangeError::NotFound("9".to_string()).to_string(),
            "user not found: 9"
        );
    }

    #[test]
    fn customer_to_employee_increments_counter() {
        let service = service();

        service
            .change_email("3", "michael@loglass.co.jp")
            .expect("change should succeed");

        let user = service.store().get_user_by_id("3").expect("user 3 exists");
        assert_eq!(user.user_type, UserType::Employee);
        assert_eq!(service.store().get_company().number_of_employees, 3);
        assert_eq!(
            *service.notifier().calls.borrow(),
            vec![("3".to_string(), "michael@loglass.co.jp".to_string())]
        );
    }

    #[test]
    fn unchanged_type_keeps_counter() {
        let service = service();

        service
            .change_email("1", "alice.new@loglass.co.jp")
            .expect("change should succeed");

        let user = service.store().get_user_by_id("1").expect("user 1 exists");
        assert_eq!(user.email, "alice.new@loglass.co.jp");
        assert_eq!(user.user_type, UserType::Employee);
        assert_eq!(service.store().get_company().number_of_employees, 2);
    }

    #[test]
    fn domain_comparison_is_case_sensitive() {
        let service = service();

        service
            .change_email("3", "michael@LOGLASS.co.jp")
            .expect("change should succeed");

        let user = service.store().get_user_by_id("3").expect("user 3 exists");
        assert_eq!(user.user_type, UserType::Customer);
        assert_eq!(service.store().get_company().number_of_employees, 2);
    }

    #[test]
    fn inconsistent_fixture_counter_is_not_clamped() {
        let store = InMemoryRecordStore::new(
            vec![User::new("1", "a@corp.io", UserType::Employee, true)],
            Company::new("corp.io", 0),
        );
        let service = EmailChangeService::new(store, RecordingNotifier::default());

        service
            .change_email("1", "a@elsewhere.io")
            .expect("change should succeed");

        assert_eq!(service.store().get_company().number_of_employees, -1);
    }
}

//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide lookup and whole-record replacement for users and the company.
//! - Keep storage details out of the email change use-case.
//!
//! # Invariants
//! - Saves replace the whole record; there are no partial-field updates.
//! - Reads return owned copies so callers cannot mutate storage in place.
//! - The company record is always present.

use crate::model::company::Company;
use crate::model::user::{User, UserType};
use log::{debug, warn};
use std::cell::RefCell;

/// Storage interface required by the email change service.
pub trait RecordStore {
    /// Returns `None` when no user has `user_id`.
    fn get_user_by_id(&self, user_id: &str) -> Option<User>;
    /// Replaces the stored user sharing `user.user_id`.
    ///
    /// Callers must have obtained the id from a prior successful lookup.
    fn save_user(&self, user: &User);
    fn get_company(&self) -> Company;
    fn save_company(&self, company: &Company);
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn get_user_by_id(&self, user_id: &str) -> Option<User> {
        (**self).get_user_by_id(user_id)
    }

    fn save_user(&self, user: &User) {
        (**self).save_user(user)
    }

    fn get_company(&self) -> Company {
        (**self).get_company()
    }

    fn save_company(&self, company: &Company) {
        (**self).save_company(company)
    }
}

/// Single-threaded in-memory record store.
///
/// Uses `RefCell` for interior mutability, so it is intentionally `!Sync`.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    users: RefCell<Vec<User>>,
    company: RefCell<Company>,
}

impl InMemoryRecordStore {
    pub fn new(users: Vec<User>, company: Company) -> Self {
        Self {
            users: RefCell::new(users),
            company: RefCell::new(company),
        }
    }

    /// Creates a store seeded with the sample users and company.
    ///
    /// - `1` alice@loglass.co.jp, employee, confirmed
    /// - `2` bob@loglass.co.jp, employee, unconfirmed
    /// - `3` michael@example.com, customer, confirmed
    /// - company `loglass.co.jp` with 2 employees
    pub fn with_fixture() -> Self {
        Self::new(
            vec![
                User::new("1", "alice@loglass.co.jp", UserType::Employee, true),
                User::new("2", "bob@loglass.co.jp", UserType::Employee, false),
                User::new("3", "michael@example.com", UserType::Customer, true),
            ],
            Company::new("loglass.co.jp", 2),
        )
    }

    /// Returns copies of all users in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    /// Counts stored users currently classified as employees.
    pub fn employee_count(&self) -> usize {
        self.users
            .borrow()
            .iter()
            .filter(|user| user.user_type.is_employee())
            .count()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::with_fixture()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get_user_by_id(&self, user_id: &str) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned()
    }

    fn save_user(&self, user: &User) {
        let mut users = self.users.borrow_mut();
        match users
            .iter()
            .position(|stored| stored.user_id == user.user_id)
        {
            Some(index) => {
                users[index] = user.clone();
                debug!(
                    "event=user_save module=repo status=ok user_id={}",
                    user.user_id
                );
            }
            None => {
                warn!(
                    "event=user_save module=repo status=skip reason=unknown_user_appended user_id={}",
                    user.user_id
                );
                users.push(user.clone());
            }
        }
    }

    fn get_company(&self) -> Company {
        self.company.borrow().clone()
    }

    fn save_company(&self, company: &Company) {
        *self.company.borrow_mut() = company.clone();
        debug!(
            "event=company_save module=repo status=ok number_of_employees={}",
            company.number_of_employees
        );
    }
}

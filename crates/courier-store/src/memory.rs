//! In-memory account store for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use courier_types::{Account, CourierError};

use crate::filter::AccountFilter;
use crate::store::AccountStore;
use crate::update::AccountUpdate;

/// A `Vec`-backed store with the same one-document-at-a-time semantics as
/// the SQLite implementation. Intended for unit and integration tests.
///
/// `fail_next_call`/`fail_after` let tests inject a single transport
/// failure to exercise the store-error paths.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
    fail_plan: Mutex<Option<u32>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an account, bypassing signup validation.
    pub fn seed(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }

    /// Make the next store call fail with a transport error.
    pub fn fail_next_call(&self) {
        self.fail_after(0);
    }

    /// Let `calls` store calls succeed, then fail the one after them.
    /// Used to reach error paths past a dispatcher-owned lookup.
    pub fn fail_after(&self, calls: u32) {
        *self.fail_plan.lock().unwrap() = Some(calls);
    }

    /// Snapshot an account by username, for assertions.
    pub fn get(&self, username: &str) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    fn check_injected_failure(&self) -> Result<(), CourierError> {
        let mut plan = self.fail_plan.lock().unwrap();
        match *plan {
            Some(0) => {
                *plan = None;
                Err(CourierError::StoreError("injected failure".to_string()))
            }
            Some(ref mut calls) => {
                *calls -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<Account>, CourierError> {
        self.check_injected_failure()?;
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| filter.matches(a))
            .cloned())
    }

    async fn update_one(
        &self,
        filter: &AccountFilter,
        update: AccountUpdate,
    ) -> Result<(), CourierError> {
        self.check_injected_failure()?;
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| filter.matches(a)) {
            update.apply(account);
        }
        Ok(())
    }

    async fn insert_one(&self, account: Account) -> Result<(), CourierError> {
        self.check_injected_failure()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(CourierError::StoreError(format!(
                "username {:?} already exists",
                account.username
            )));
        }
        accounts.push(account);
        Ok(())
    }
}

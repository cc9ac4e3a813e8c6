#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::clock::{Clock, SystemClock};
use super::types::Account;
use super::{SESSION_KEY, account_key};
use crate::error::ErrorCode;
use crate::storage::{KeyValueStore, StorageError, load_json, save_json};

/// Store operation that hit a storage failure; selects the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Authenticate,
    ClearSession,
}

impl Operation {
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Error creating account",
            Self::Authenticate => "Error signing in",
            Self::ClearSession => "Error signing out",
        }
    }
}

/// Account store failures. `Display` is the message shown on the auth screen.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("User already exists")]
    AlreadyExists,
    #[error("User not found")]
    NotFound,
    #[error("Incorrect password")]
    InvalidCredentials,
    #[error("{}", .operation.failure_message())]
    StorageUnavailable {
        operation: Operation,
        #[source]
        source: StorageError,
    },
}

impl AccountError {
    #[must_use]
    pub fn storage(operation: Operation, source: StorageError) -> Self {
        Self::StorageUnavailable { operation, source }
    }
}

impl ErrorCode for AccountError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "E_ALREADY_EXISTS",
            Self::NotFound => "E_NOT_FOUND",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::StorageUnavailable { .. } => "E_STORAGE",
        }
    }
}

/// Account CRUD and session bookkeeping over a [`KeyValueStore`].
///
/// Every successful `create` or `authenticate` also overwrites the session
/// slot with a copy of the account, so the session is a snapshot taken at
/// sign-in time rather than a live view.
#[derive(Debug)]
pub struct AccountStore<S, C = SystemClock> {
    storage: S,
    clock: C,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> AccountStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn into_storage(self) -> S {
        self.storage
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// [`AccountError::AlreadyExists`] when any record exists for `username`;
    /// [`AccountError::StorageUnavailable`] when the backend fails. If the
    /// session write fails after the account record was written, the record
    /// is removed again so the username stays free for a retry.
    pub fn create(&mut self, username: &str, password: &str, email: &str) -> Result<Account, AccountError> {
        let key = account_key(username);
        let existing = self
            .storage
            .get(&key)
            .map_err(|e| AccountError::storage(Operation::Create, e))?;
        if existing.is_some() {
            return Err(AccountError::AlreadyExists);
        }

        let account = Account::new(username, password, email, self.clock.now_iso8601());
        save_json(&mut self.storage, &key, &account).map_err(|e| AccountError::storage(Operation::Create, e))?;
        if let Err(e) = save_json(&mut self.storage, SESSION_KEY, &account) {
            if let Err(rollback) = self.storage.remove(&key) {
                leptos::logging::warn!("could not roll back account {username}: {rollback}");
            }
            return Err(AccountError::storage(Operation::Create, e));
        }
        Ok(account)
    }

    /// Verify credentials, stamp `last_login`, and sign the account in.
    ///
    /// # Errors
    ///
    /// [`AccountError::NotFound`] for an unknown username,
    /// [`AccountError::InvalidCredentials`] on password mismatch (the stored
    /// record is left untouched), [`AccountError::StorageUnavailable`] when the
    /// backend fails or the record cannot be decoded.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<Account, AccountError> {
        let key = account_key(username);
        let mut account: Account = load_json(&self.storage, &key)
            .map_err(|e| AccountError::storage(Operation::Authenticate, e))?
            .ok_or(AccountError::NotFound)?;

        if !account.password_matches(password) {
            return Err(AccountError::InvalidCredentials);
        }

        account.last_login = Some(self.clock.now_iso8601());
        self.persist(&key, &account)
            .map_err(|e| AccountError::storage(Operation::Authenticate, e))?;
        Ok(account)
    }

    /// The signed-in account, if any.
    ///
    /// An unreadable or corrupt session record counts as signed out.
    pub fn session(&self) -> Option<Account> {
        match load_json(&self.storage, SESSION_KEY) {
            Ok(session) => session,
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable session: {e}");
                None
            }
        }
    }

    /// Drop the session slot. Account records are kept.
    ///
    /// # Errors
    ///
    /// [`AccountError::StorageUnavailable`] when the backend refuses the delete.
    pub fn clear_session(&mut self) -> Result<(), AccountError> {
        self.storage
            .remove(SESSION_KEY)
            .map_err(|e| AccountError::storage(Operation::ClearSession, e))
    }

    fn persist(&mut self, key: &str, account: &Account) -> Result<(), StorageError> {
        save_json(&mut self.storage, key, account)?;
        save_json(&mut self.storage, SESSION_KEY, account)
    }
}

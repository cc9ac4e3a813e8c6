use std::cell::Cell;

use super::*;
use crate::storage::MemoryStore;

/// Clock that advances one second per reading.
struct StepClock {
    tick: Cell<u32>,
}

impl StepClock {
    fn new() -> Self {
        Self { tick: Cell::new(0) }
    }
}

impl Clock for StepClock {
    fn now_iso8601(&self) -> String {
        let tick = self.tick.get();
        self.tick.set(tick + 1);
        format!("2024-01-01T00:00:{tick:02}.000Z")
    }
}

/// Backend that fails every call.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_owned()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Memory backend that refuses to write the session key.
#[derive(Default)]
struct NoSessionWrites {
    inner: MemoryStore,
}

impl KeyValueStore for NoSessionWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == SESSION_KEY {
            return Err(StorageError::Backend("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn store() -> AccountStore<MemoryStore, StepClock> {
    AccountStore::with_clock(MemoryStore::default(), StepClock::new())
}

fn stored_account(store: &AccountStore<MemoryStore, StepClock>, username: &str) -> Option<Account> {
    load_json(store.storage(), &account_key(username)).unwrap()
}

// =============================================================
// create
// =============================================================

#[test]
fn create_persists_account_and_session() {
    let mut store = store();
    let account = store.create("alice", "pw123", "a@x.com").unwrap();

    assert_eq!(account.username, "alice");
    assert_eq!(account.created_at, "2024-01-01T00:00:00.000Z");
    assert_eq!(stored_account(&store, "alice"), Some(account.clone()));
    assert_eq!(store.session(), Some(account));
}

#[test]
fn create_uses_prefixed_keys() {
    let mut store = store();
    store.create("alice", "pw123", "a@x.com").unwrap();
    let keys: Vec<_> = store.storage().keys().collect();
    assert_eq!(keys, vec!["neurofit_session", "neurofit_user_alice"]);
}

#[test]
fn create_duplicate_leaves_account_and_session_untouched() {
    let mut store = store();
    store.create("alice", "pw123", "a@x.com").unwrap();
    store.create("bob", "pw", "b@x.com").unwrap();
    let before = store.storage().clone();

    let err = store.create("alice", "other", "other@x.com").unwrap_err();

    assert!(matches!(err, AccountError::AlreadyExists));
    assert_eq!(err.to_string(), "User already exists");
    assert_eq!(store.storage(), &before);
    assert_eq!(store.session().map(|a| a.username), Some("bob".to_owned()));
}

#[test]
fn usernames_are_case_sensitive() {
    let mut store = store();
    store.create("alice", "pw", "a@x.com").unwrap();
    assert!(store.create("Alice", "pw", "A@x.com").is_ok());
}

#[test]
fn create_reports_storage_failure() {
    let mut store = AccountStore::with_clock(BrokenStore, StepClock::new());
    let err = store.create("alice", "pw", "a@x.com").unwrap_err();
    assert!(matches!(err, AccountError::StorageUnavailable { operation: Operation::Create, .. }));
    assert_eq!(err.to_string(), "Error creating account");
    assert_eq!(err.error_code(), "E_STORAGE");
}

#[test]
fn create_rolls_back_account_when_session_write_fails() {
    let mut store = AccountStore::with_clock(NoSessionWrites::default(), StepClock::new());

    let err = store.create("alice", "pw123", "a@x.com").unwrap_err();

    assert!(matches!(err, AccountError::StorageUnavailable { operation: Operation::Create, .. }));
    assert_eq!(err.to_string(), "Error creating account");
    assert!(store.storage().inner.is_empty());
    let retry = store.create("alice", "pw123", "a@x.com").unwrap_err();
    assert!(matches!(retry, AccountError::StorageUnavailable { .. }));
}

// =============================================================
// authenticate
// =============================================================

#[test]
fn authenticate_updates_last_login_only() {
    let mut store = store();
    let created = store.create("alice", "pw123", "a@x.com").unwrap();

    let signed_in = store.authenticate("alice", "pw123").unwrap();

    assert_eq!(signed_in.last_login.as_deref(), Some("2024-01-01T00:00:01.000Z"));
    assert_eq!(signed_in.created_at, created.created_at);
    assert_eq!(signed_in.total_score, created.total_score);
    assert_eq!(signed_in.streak, created.streak);
    assert_eq!(signed_in.levels_played, created.levels_played);
    assert_eq!(stored_account(&store, "alice"), Some(signed_in.clone()));
    assert_eq!(store.session(), Some(signed_in));
}

#[test]
fn authenticate_refreshes_last_login_each_time() {
    let mut store = store();
    store.create("alice", "pw123", "a@x.com").unwrap();
    let first = store.authenticate("alice", "pw123").unwrap();
    let second = store.authenticate("alice", "pw123").unwrap();
    assert_ne!(first.last_login, second.last_login);
}

#[test]
fn authenticate_keeps_stored_progress() {
    let store = store();
    let mut veteran = Account::new("vet", "pw", "v@x.com", "2023-01-01T00:00:00.000Z".to_owned());
    veteran.total_score = 1200;
    veteran.streak = 7;
    veteran.levels_played = 31;
    veteran.is_premium = true;
    let mut backend = store.into_storage();
    save_json(&mut backend, &account_key("vet"), &veteran).unwrap();
    let mut store = AccountStore::with_clock(backend, StepClock::new());

    let signed_in = store.authenticate("vet", "pw").unwrap();

    assert_eq!(signed_in.total_score, 1200);
    assert_eq!(signed_in.streak, 7);
    assert_eq!(signed_in.levels_played, 31);
    assert!(signed_in.is_premium);
}

#[test]
fn authenticate_wrong_password_leaves_store_unmodified() {
    let mut store = store();
    store.create("alice", "pw123", "a@x.com").unwrap();
    let before = store.storage().clone();

    let err = store.authenticate("alice", "wrong").unwrap_err();

    assert!(matches!(err, AccountError::InvalidCredentials));
    assert_eq!(err.to_string(), "Incorrect password");
    assert_eq!(err.error_code(), "E_INVALID_CREDENTIALS");
    assert_eq!(store.storage(), &before);
}

#[test]
fn authenticate_unknown_user_is_not_found() {
    let mut store = store();
    let err = store.authenticate("ghost", "pw").unwrap_err();
    assert!(matches!(err, AccountError::NotFound));
    assert_eq!(err.to_string(), "User not found");
    assert_eq!(err.error_code(), "E_NOT_FOUND");
}

#[test]
fn authenticate_corrupt_record_is_storage_failure() {
    let mut backend = MemoryStore::default();
    backend.set(&account_key("alice"), "{oops").unwrap();
    let mut store = AccountStore::with_clock(backend, StepClock::new());

    let err = store.authenticate("alice", "pw").unwrap_err();

    assert!(matches!(err, AccountError::StorageUnavailable { operation: Operation::Authenticate, .. }));
    assert_eq!(err.to_string(), "Error signing in");
}

// =============================================================
// session
// =============================================================

#[test]
fn session_is_none_on_empty_store() {
    assert_eq!(store().session(), None);
}

#[test]
fn corrupt_session_counts_as_signed_out() {
    let mut backend = MemoryStore::default();
    backend.set(SESSION_KEY, "not json").unwrap();
    let store = AccountStore::with_clock(backend, StepClock::new());
    assert_eq!(store.session(), None);
}

#[test]
fn unreadable_session_counts_as_signed_out() {
    let store = AccountStore::with_clock(BrokenStore, StepClock::new());
    assert_eq!(store.session(), None);
}

#[test]
fn clear_session_keeps_accounts() {
    let mut store = store();
    let account = store.create("alice", "pw123", "a@x.com").unwrap();

    store.clear_session().unwrap();

    assert_eq!(store.session(), None);
    assert_eq!(stored_account(&store, "alice"), Some(account));
    assert!(store.authenticate("alice", "pw123").is_ok());
}

#[test]
fn clear_session_reports_backend_failure() {
    let mut store = AccountStore::with_clock(BrokenStore, StepClock::new());
    let err = store.clear_session().unwrap_err();
    assert_eq!(err.to_string(), "Error signing out");
}

// =============================================================
// End to end
// =============================================================

#[test]
fn register_wrong_password_then_sign_in() {
    let mut store = store();

    let session = store.create("alice", "pw123", "a@x.com").unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!((session.total_score, session.streak, session.levels_played), (0, 0, 0));
    assert!(!session.is_premium);

    assert!(matches!(
        store.authenticate("alice", "wrong"),
        Err(AccountError::InvalidCredentials)
    ));

    let signed_in = store.authenticate("alice", "pw123").unwrap();
    assert!(signed_in.last_login.is_some());
    assert_eq!(store.session(), stored_account(&store, "alice"));
}

//! Key-value persistence adapters for browser-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Account and session records are plain JSON strings under well-known keys.
//! The `KeyValueStore` seam lets the account store run against
//! `window.localStorage` in the browser and an in-process map during server
//! rendering and tests.


#[cfg(feature = "hydrate")]
mod browser;
mod memory;

#[cfg(feature = "hydrate")]
pub use browser::BrowserStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("invalid stored json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal string key-value surface shared by all backends.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Backend used by the running app: `localStorage` when hydrated.
#[cfg(feature = "hydrate")]
pub type DefaultStore = BrowserStore;

/// Backend used by the running app: an empty in-memory map outside the browser.
#[cfg(not(feature = "hydrate"))]
pub type DefaultStore = MemoryStore;

/// Open the backend for the current build target.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] when the browser exposes no
/// `localStorage` (privacy mode, sandboxed iframes).
pub fn open_default() -> Result<DefaultStore, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        BrowserStore::open()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(MemoryStore::default())
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Propagates backend failures and reports undecodable values as
/// [`StorageError::Json`].
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Propagates serialization and backend failures.
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

//! Local account records and the active session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accounts live entirely in the browser: one JSON record per username plus a
//! denormalized copy of the signed-in account under the session key. Pages
//! talk to [`AccountStore`]; nothing else touches these keys.
//!
//! TRADE-OFFS
//! ==========
//! Passwords are stored and compared as plaintext so records stay
//! interchangeable with stores written by earlier builds of the app.
//!
//! Keys are namespaced with [`KEY_PREFIX`], so the session lives under
//! `neurofit_session` and accounts under `neurofit_user_<name>` rather than
//! the bare `session` and `user_<name>`. The prefix keeps this app's entries
//! apart from anything else sharing the origin's local storage, and matches
//! the keys earlier builds wrote.

mod clock;
mod store;
mod types;

pub use clock::{Clock, SystemClock, format_timestamp};
pub use store::{AccountError, AccountStore, Operation};
pub use types::Account;

/// Namespace prefix shared by every persisted key.
pub const KEY_PREFIX: &str = "neurofit_";

/// Key holding the active session record.
pub const SESSION_KEY: &str = "neurofit_session";

/// Storage key for the account record of `username`. The name is used verbatim.
#[must_use]
pub fn account_key(username: &str) -> String {
    format!("{KEY_PREFIX}user_{username}")
}

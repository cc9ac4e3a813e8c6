//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds which screen the shell renders and the session account it renders
//! with. Provided once as a context signal from `App`; pages drive the
//! transitions below after talking to the account store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::account::Account;

/// Top-level screen of the single-page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Splash shown until the stored session has been read.
    #[default]
    Loading,
    /// Login / register form.
    Auth,
    /// Dashboard for the signed-in account.
    Home,
}

/// Current screen plus the session account.
///
/// `user` is `Some` exactly when `screen` is [`Screen::Home`].
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub screen: Screen,
    pub user: Option<Account>,
}

impl AuthState {
    /// Leave the splash: home with a stored session, otherwise the auth form.
    ///
    /// Only applies while loading; later calls are ignored.
    pub fn resolve_startup(&mut self, session: Option<Account>) {
        if self.screen != Screen::Loading {
            return;
        }
        match session {
            Some(account) => self.signed_in(account),
            None => self.screen = Screen::Auth,
        }
    }

    pub fn signed_in(&mut self, account: Account) {
        self.user = Some(account);
        self.screen = Screen::Home;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.screen = Screen::Auth;
    }
}

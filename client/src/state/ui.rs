//! Local auth-form chrome state (mode, error banner, in-flight flag).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `auth` so the session
//! transitions stay independent of how the form is drawn.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::account::Operation;

/// Which form the auth screen shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Store operation a submission in this mode performs.
    #[must_use]
    pub fn operation(self) -> Operation {
        match self {
            Self::Login => Operation::Authenticate,
            Self::Register => Operation::Create,
        }
    }
}

/// UI state for the auth form.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub auth_mode: AuthMode,
    pub auth_error: Option<String>,
    pub submitting: bool,
}

impl UiState {
    /// Switch between login and register. Clears any shown error.
    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
        self.auth_error = None;
    }

    pub fn begin_submit(&mut self) {
        self.auth_error = None;
        self.submitting = true;
    }

    /// Finish a submission, showing `error` if it failed.
    pub fn finish_submit(&mut self, error: Option<String>) {
        self.auth_error = error;
        self.submitting = false;
    }
}

//! Login / register page backed by the local account store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry screen for signed-out users. Form input is checked here before any
//! storage access; store failures come back as the message to display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::account::{Account, AccountError, AccountStore, Clock};
use crate::error::ErrorCode;
use crate::state::auth::AuthState;
use crate::state::ui::{AuthMode, UiState};
use crate::storage::{self, KeyValueStore};

/// Form problems caught before touching storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please complete all fields")]
    MissingFields,
    #[error("Please enter your email")]
    MissingEmail,
}

impl ErrorCode for FormError {
    fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

/// Anything that can stop a submission. `Display` is the banner text.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ErrorCode for SubmitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Form(e) => e.error_code(),
            Self::Account(e) => e.error_code(),
        }
    }
}

/// A form submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Login { username: String, password: String },
    Register { username: String, password: String, email: String },
}

impl Credentials {
    /// Run the store operation for this submission.
    ///
    /// # Errors
    ///
    /// Whatever the store reports for `authenticate` or `create`.
    pub fn submit<S: KeyValueStore, C: Clock>(&self, store: &mut AccountStore<S, C>) -> Result<Account, AccountError> {
        match self {
            Self::Login { username, password } => store.authenticate(username, password),
            Self::Register { username, password, email } => store.create(username, password, email),
        }
    }
}

/// Check required fields for `mode`. Values are taken as typed, untrimmed.
///
/// # Errors
///
/// [`FormError::MissingFields`] for an empty username or password,
/// [`FormError::MissingEmail`] for an empty email when registering.
pub fn validate_auth_form(
    mode: AuthMode,
    username: &str,
    password: &str,
    email: &str,
) -> Result<Credentials, FormError> {
    if username.is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    match mode {
        AuthMode::Login => Ok(Credentials::Login { username: username.to_owned(), password: password.to_owned() }),
        AuthMode::Register if email.is_empty() => Err(FormError::MissingEmail),
        AuthMode::Register => Ok(Credentials::Register {
            username: username.to_owned(),
            password: password.to_owned(),
            email: email.to_owned(),
        }),
    }
}

fn submit_auth_form(mode: AuthMode, username: &str, password: &str, email: &str) -> Result<Account, SubmitError> {
    let credentials = validate_auth_form(mode, username, password, email)?;
    let backend = storage::open_default().map_err(|e| AccountError::storage(mode.operation(), e))?;
    Ok(credentials.submit(&mut AccountStore::new(backend))?)
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Welcome back",
        AuthMode::Register => "Create your account",
    }
}

fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    match (submitting, mode) {
        (true, _) => "Loading...",
        (false, AuthMode::Login) => "Sign In",
        (false, AuthMode::Register) => "Create Account",
    }
}

fn toggle_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Don't have an account? Sign up",
        AuthMode::Register => "Already have an account? Sign in",
    }
}

/// Auth screen: one form that switches between login and register.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let mode = move || ui.get().auth_mode;
    let submitting = move || ui.get().submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.get_untracked().submitting {
            return;
        }
        ui.update(UiState::begin_submit);

        let result = submit_auth_form(
            ui.get_untracked().auth_mode,
            &username.get_untracked(),
            &password.get_untracked(),
            &email.get_untracked(),
        );
        match result {
            Ok(account) => {
                leptos::logging::log!("signed in as {}", account.username);
                ui.update(|u| u.finish_submit(None));
                auth.update(|a| a.signed_in(account));
            }
            Err(e) => {
                if matches!(e, SubmitError::Account(AccountError::StorageUnavailable { .. })) {
                    leptos::logging::warn!("{}: {:?}", e.error_code(), e);
                }
                ui.update(|u| u.finish_submit(Some(e.to_string())));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <span class="auth-card__logo" aria-hidden="true">"🧠"</span>
                    <h1 class="brand-title">"NeuroFit"</h1>
                    <p class="auth-card__subtitle">{move || heading(mode())}</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || mode() == AuthMode::Register>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || ui.get().auth_error.is_some()>
                        <p class="auth-error" role="alert">
                            {move || ui.get().auth_error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=submitting>
                        {move || submit_label(mode(), submitting())}
                    </button>
                    <button
                        class="btn btn--link auth-toggle"
                        type="button"
                        on:click=move |_| ui.update(UiState::toggle_auth_mode)
                    >
                        {move || toggle_label(mode())}
                    </button>
                </form>
            </div>
        </div>
    }
}

//! Home dashboard for the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the session copy of the account. Progress numbers are whatever was
//! captured at sign-in; nothing here re-reads the account record.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::account::{AccountError, AccountStore, Clock, Operation};
use crate::catalog::{CATEGORIES, intro_line};
use crate::components::category_card::CategoryCard;
use crate::components::premium_panel::PremiumPanel;
use crate::components::stat_card::StatCard;
use crate::error::ErrorCode;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::storage::{self, KeyValueStore};

fn greeting(username: &str) -> String {
    format!("Hello, {username}!")
}

/// Clear the stored session, then move `auth` back to the form.
///
/// On failure `auth` is left on the dashboard, since the session would
/// otherwise come back on the next start.
fn sign_out<S: KeyValueStore, C: Clock>(
    store: &mut AccountStore<S, C>,
    auth: &mut AuthState,
) -> Result<(), AccountError> {
    store.clear_session()?;
    auth.signed_out();
    Ok(())
}

/// [`sign_out`] against the app's default store.
fn sign_out_stored(auth: &mut AuthState) -> Result<(), AccountError> {
    let backend = storage::open_default().map_err(|e| AccountError::storage(Operation::ClearSession, e))?;
    sign_out(&mut AccountStore::new(backend), auth)
}

/// Dashboard with progress stats, locked categories, and the premium upsell.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let account = Memo::new(move |_| auth.get().user.unwrap_or_default());
    let logout_error = RwSignal::new(None::<String>);

    let on_logout = move |_| {
        let mut next = auth.get_untracked();
        match sign_out_stored(&mut next) {
            Ok(()) => {
                logout_error.set(None);
                ui.set(UiState::default());
                auth.set(next);
            }
            Err(e) => {
                leptos::logging::warn!("{}: {e:?}", e.error_code());
                logout_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="home-page">
            <header class="home-card home-header">
                <div class="home-header__top">
                    <div class="home-header__brand">
                        <span class="home-header__logo" aria-hidden="true">"🧠"</span>
                        <div>
                            <h1 class="brand-title">"NeuroFit"</h1>
                            <p class="home-header__greeting">{move || greeting(&account.get().username)}</p>
                        </div>
                    </div>
                    <button class="btn home-header__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
                <Show when=move || logout_error.get().is_some()>
                    <p class="auth-error home-header__error" role="alert">
                        {move || logout_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="stat-grid">
                    <StatCard
                        icon="🏆"
                        tone="score"
                        label="Total Points"
                        value=Signal::derive(move || account.get().total_score)
                    />
                    <StatCard
                        icon="⚡"
                        tone="streak"
                        label="Day Streak"
                        value=Signal::derive(move || account.get().streak)
                    />
                    <StatCard
                        icon="🧠"
                        tone="levels"
                        label="Levels Played"
                        value=Signal::derive(move || account.get().levels_played)
                    />
                </div>
            </header>

            <section class="home-card home-intro">
                <h2>"Welcome to NeuroFit!"</h2>
                <p class="home-intro__text">{intro_line()}</p>
                <div class="category-grid">
                    {CATEGORIES.iter().map(|category| view! { <CategoryCard category=*category/> }).collect::<Vec<_>>()}
                </div>
                <PremiumPanel/>
            </section>
        </div>
    }
}

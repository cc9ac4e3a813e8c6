//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::account::{Account, AccountStore};
use crate::pages::shell::ShellPage;
use crate::state::{auth::AuthState, ui::UiState};
use crate::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Read the persisted session once at startup.
fn load_startup_session() -> Option<Account> {
    match storage::open_default() {
        Ok(backend) => AccountStore::new(backend).session(),
        Err(e) => {
            leptos::logging::warn!("no active session: {e}");
            None
        }
    }
}

/// Root application component.
///
/// Provides the auth and UI state contexts, then resolves the stored session
/// once the app is running in the browser. Server rendering stops at the
/// loading splash.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Effects only run client-side.
    Effect::new(move || {
        let session = load_startup_session();
        auth.update(|a| a.resolve_startup(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/neurofit.css"/>
        <Title text="NeuroFit"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShellPage/>
            </Routes>
        </Router>
    }
}

//! Single route that switches between the splash, auth, and home screens.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::splash::Splash;
use crate::pages::auth::AuthPage;
use crate::pages::home::HomePage;
use crate::state::auth::{AuthState, Screen};

/// Renders whichever screen `AuthState` currently selects.
#[component]
pub fn ShellPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let screen = Memo::new(move |_| auth.get().screen);

    move || match screen.get() {
        Screen::Loading => view! { <Splash/> }.into_any(),
        Screen::Auth => view! { <AuthPage/> }.into_any(),
        Screen::Home => view! { <HomePage/> }.into_any(),
    }
}

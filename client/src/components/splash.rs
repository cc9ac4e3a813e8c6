//! Loading splash shown while the stored session is read.

use leptos::prelude::*;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <span class="splash__logo" aria-hidden="true">"🧠"</span>
            <p class="splash__text">"Loading NeuroFit..."</p>
        </div>
    }
}

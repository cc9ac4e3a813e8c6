//! Premium upsell panel. The call-to-action has no handler.

use leptos::prelude::*;

use crate::catalog::premium_pitch;

#[component]
pub fn PremiumPanel() -> impl IntoView {
    view! {
        <div class="premium-panel">
            <span class="premium-panel__icon" aria-hidden="true">"⭐"</span>
            <h3 class="premium-panel__title">"Go Premium!"</h3>
            <p class="premium-panel__pitch">{premium_pitch()}</p>
            <button class="btn premium-panel__cta" type="button">
                "Subscribe Now"
            </button>
        </div>
    }
}

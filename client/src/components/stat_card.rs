//! Progress statistic card.

use leptos::prelude::*;

/// A single number with an icon and caption. `tone` selects the color scheme.
#[component]
pub fn StatCard(
    icon: &'static str,
    tone: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<i64>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{tone}")>
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

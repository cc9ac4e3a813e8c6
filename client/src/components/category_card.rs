//! Locked game-category card for the dashboard grid.
//!
//! DESIGN
//! ======
//! Cards are inert placeholders: no link, no click handler, and
//! `aria-disabled` so assistive tech reports them as unavailable.

use leptos::prelude::*;

use crate::catalog::{GameCategory, games_available_label};

#[component]
pub fn CategoryCard(category: GameCategory) -> impl IntoView {
    view! {
        <div
            class=format!("category-card category-card--{} category-card--locked", category.tone)
            aria-disabled="true"
        >
            <span class="category-card__icon" aria-hidden="true">{category.icon}</span>
            <span class="category-card__name">{category.name}</span>
            <span class="category-card__count">{games_available_label(category.game_count)}</span>
            <span class="category-card__lock" title="Locked">"🔒"</span>
        </div>
    }
}

//! Static game catalog shown on the home dashboard.
//!
//! Categories are display-only: every one renders locked and none links to
//! playable content.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Monthly premium price in whole US dollars.
pub const PREMIUM_PRICE_USD: u32 = 2;

/// A locked game category card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub game_count: u32,
    /// CSS modifier selecting the card gradient.
    pub tone: &'static str,
}

/// Categories in display order.
pub const CATEGORIES: [GameCategory; 6] = [
    GameCategory { name: "Memory", icon: "🧠", game_count: 2, tone: "memory" },
    GameCategory { name: "Speed", icon: "⚡", game_count: 2, tone: "speed" },
    GameCategory { name: "Attention", icon: "👁️", game_count: 2, tone: "attention" },
    GameCategory { name: "Language", icon: "📝", game_count: 3, tone: "language" },
    GameCategory { name: "Reasoning", icon: "🧩", game_count: 2, tone: "reasoning" },
    GameCategory { name: "Flexibility", icon: "🔄", game_count: 2, tone: "flexibility" },
];

/// Games across all categories.
#[must_use]
pub fn total_games() -> u32 {
    CATEGORIES.iter().map(|c| c.game_count).sum()
}

#[must_use]
pub fn games_available_label(count: u32) -> String {
    if count == 1 {
        "1 game available".to_owned()
    } else {
        format!("{count} games available")
    }
}

#[must_use]
pub fn intro_line() -> String {
    format!(
        "Your cognitive training platform with {} scientifically designed games",
        total_games()
    )
}

#[must_use]
pub fn premium_pitch() -> String {
    format!("Unlock all {} games for just ${PREMIUM_PRICE_USD} USD/month", total_games())
}

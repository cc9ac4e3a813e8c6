#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A persisted user record, keyed by `username`.
///
/// Field names serialize in camelCase. Missing optional fields default on
/// read so older or hand-edited records still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub created_at: String,
    /// Set on every successful sign-in; absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub streak: i64,
    #[serde(default)]
    pub levels_played: i64,
}

impl Account {
    /// A fresh, non-premium account with zeroed progress.
    #[must_use]
    pub fn new(username: &str, password: &str, email: &str, created_at: String) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            email: email.to_owned(),
            is_premium: false,
            created_at,
            last_login: None,
            total_score: 0,
            streak: 0,
            levels_played: 0,
        }
    }

    /// Exact plaintext comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

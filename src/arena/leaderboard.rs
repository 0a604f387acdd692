//! Placeholder model leaderboard.
//!
//! The table is static. It is not computed from submitted predictions.

use serde::{Deserialize, Serialize};

/// One ranked model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub rank: u32,
    pub brier_score: f64,
    #[serde(rename = "return")]
    pub return_rate: f64,
}

/// Body of `GET /api/leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leaderboard {
    pub models: Vec<LeaderboardEntry>,
}

const ENTRIES: [(&str, f64, f64); 3] = [
    ("GPT-5 (high)", 0.184, 0.943),
    ("Grok-4", 0.189, 0.864),
    ("Claude Sonnet 4", 0.194, 0.909),
];

/// Build the fixed leaderboard, ranked from 1.
pub fn leaderboard() -> Leaderboard {
    let models = ENTRIES
        .iter()
        .zip(1..)
        .map(|(&(name, brier_score, return_rate), rank)| LeaderboardEntry {
            name: name.to_string(),
            rank,
            brier_score,
            return_rate,
        })
        .collect();

    Leaderboard { models }
}

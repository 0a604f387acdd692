//! Prophet Arena request and response shapes.
//!
//! Nothing here is persisted. Queries pass straight through to the
//! upstream, the leaderboard is a fixed table and predictions are echoed.

pub mod leaderboard;
pub mod types;

pub use leaderboard::{leaderboard, Leaderboard, LeaderboardEntry};
pub use types::{EventsQuery, MarketsQuery, PredictionReceipt, PredictionSubmission, ServiceStatus};

//! Transient request/response types.

use serde::{Deserialize, Serialize};

/// Status string reported by `GET /`.
pub const SERVICE_STATUS: &str = "Prophet Arena API Running";

/// Status attached to every accepted prediction.
pub const PREDICTION_RECORDED: &str = "recorded";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self {
            status: SERVICE_STATUS.to_string(),
        }
    }
}

/// Paging for `GET /api/events`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventsQuery {
    pub limit: i64,
    pub offset: i64,
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// Optional ticker filter for `GET /api/markets`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MarketsQuery {
    pub ticker: Option<String>,
}

impl MarketsQuery {
    /// The ticker to forward, if any. Empty strings count as absent.
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref().filter(|t| !t.is_empty())
    }
}

/// A model's forecast for one market.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PredictionSubmission {
    pub market_id: String,
    pub probability: f64,
    #[serde(default)]
    pub rationale: Option<String>,
}

/// Acknowledgment returned for a submission. Nothing is stored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PredictionReceipt {
    pub market_id: String,
    pub probability: f64,
    pub rationale: Option<String>,
    pub status: String,
}

impl From<PredictionSubmission> for PredictionReceipt {
    fn from(submission: PredictionSubmission) -> Self {
        Self {
            market_id: submission.market_id,
            probability: submission.probability,
            rationale: submission.rationale,
            status: PREDICTION_RECORDED.to_string(),
        }
    }
}

//! Kalshi upstream subsystem.
//!
//! # Data Flow
//! ```text
//! handler query (EventsQuery / MarketsQuery)
//!     → client.rs (build URL, attach bearer token)
//!     → one GET to the Kalshi API
//!     → body checked to be JSON and returned byte for byte
//! ```
//!
//! # Design Decisions
//! - No connection pooling: each call opens its own connection
//! - No retries; the upstream status code is not inspected
//! - The API secret is carried but never sent

pub mod client;
pub mod error;

pub use client::KalshiClient;
pub use error::{UpstreamError, UpstreamResult};

//! Prophet Arena gateway library.
//!
//! A thin HTTP front for the Kalshi market-data API plus a placeholder
//! model leaderboard and a prediction echo endpoint.

pub mod arena;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env + config file (TOML, optional)
//!     → loader.rs (parse, apply environment overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to GatewayServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow running without a file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CorsConfig, GatewayConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};

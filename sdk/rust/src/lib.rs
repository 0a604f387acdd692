//! Client SDK for the Prophet Arena gateway.

pub mod client;

pub use client::{ArenaClient, PredictionRequest};

//! Kalshi HTTP client.
//!
//! # Responsibilities
//! - Build upstream URLs from the configured base and inbound queries
//! - Attach `Authorization: Bearer <api_key>`
//! - Issue a single GET and check the body is JSON, keeping its exact text
//! - Enforce the optional per-call timeout

use serde_json::value::RawValue;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use url::Url;

use crate::arena::{EventsQuery, MarketsQuery};
use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Path both proxied routes read from.
const MARKETS_PATH: &str = "markets";

/// Thin wrapper over `reqwest` pointed at the Kalshi API.
#[derive(Clone)]
pub struct KalshiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    timeout: Option<Duration>,
}

impl KalshiClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Base URL every request is built from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a secret was configured. It is never used to sign requests.
    pub fn has_api_secret(&self) -> bool {
        !self.api_secret.is_empty()
    }

    /// `<base>/markets?limit=..&offset=..`
    pub fn events_url(&self, query: &EventsQuery) -> UpstreamResult<Url> {
        let mut url = self.endpoint(MARKETS_PATH)?;
        url.query_pairs_mut()
            .append_pair("limit", &query.limit.to_string())
            .append_pair("offset", &query.offset.to_string());
        Ok(url)
    }

    /// `<base>/markets`, with `?ticker=..` only when a ticker was given.
    pub fn markets_url(&self, query: &MarketsQuery) -> UpstreamResult<Url> {
        let mut url = self.endpoint(MARKETS_PATH)?;
        if let Some(ticker) = query.ticker() {
            url.query_pairs_mut().append_pair("ticker", ticker);
        }
        Ok(url)
    }

    /// Fetch a page of events.
    pub async fn fetch_events(&self, query: &EventsQuery) -> UpstreamResult<Box<RawValue>> {
        let url = self.events_url(query)?;
        self.get_json("events", url).await
    }

    /// Fetch markets, optionally filtered by ticker.
    pub async fn fetch_markets(&self, query: &MarketsQuery) -> UpstreamResult<Box<RawValue>> {
        let url = self.markets_url(query)?;
        self.get_json("markets", url).await
    }

    fn endpoint(&self, path: &str) -> UpstreamResult<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|source| UpstreamError::InvalidUrl { url: raw, source })
    }

    async fn get_json(&self, route: &'static str, url: Url) -> UpstreamResult<Box<RawValue>> {
        let start = Instant::now();
        tracing::debug!(route, url = %url, "Calling upstream");

        let result = match self.timeout {
            Some(limit) => timeout(limit, self.send(url))
                .await
                .unwrap_or_else(|_| Err(UpstreamError::Timeout(limit.as_secs()))),
            None => self.send(url).await,
        };

        match &result {
            Ok(_) => metrics::record_upstream(route, "ok", start),
            Err(_) => metrics::record_upstream(route, "error", start),
        }
        result
    }

    async fn send(&self, url: Url) -> UpstreamResult<Box<RawValue>> {
        let response = self.http.get(url).bearer_auth(&self.api_key).send().await?;
        let status = response.status();
        let body = response.json::<Box<RawValue>>().await?;
        tracing::debug!(status = %status, "Upstream responded");
        Ok(body)
    }
}

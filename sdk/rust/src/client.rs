use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub market_id: String,
    pub probability: f64,
    pub rationale: Option<String>,
}

pub struct ArenaClient {
    client: Client,
    gateway_url: String,
}

impl ArenaClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            // Gateways in tests live on loopback; never route through a proxy.
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_default(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /`
    pub async fn status(&self) -> Result<Response, reqwest::Error> {
        self.get("/", &[]).await
    }

    /// `GET /api/events`. `None` leaves the gateway default in place.
    pub async fn events(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Response, reqwest::Error> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        self.get("/api/events", &query).await
    }

    /// `GET /api/markets`
    pub async fn markets(&self, ticker: Option<&str>) -> Result<Response, reqwest::Error> {
        let query: Vec<(&str, String)> = ticker.map(|t| ("ticker", t.to_string())).into_iter().collect();
        self.get("/api/markets", &query).await
    }

    /// `GET /api/leaderboard`
    pub async fn leaderboard(&self) -> Result<Response, reqwest::Error> {
        self.get("/api/leaderboard", &[]).await
    }

    /// `POST /api/predictions`
    pub async fn submit_prediction(&self, req: &PredictionRequest) -> Result<Response, reqwest::Error> {
        self.client
            .post(format!("{}/api/predictions", self.gateway_url))
            .json(req)
            .send()
            .await
    }

    /// Decode a response body as JSON, returning the status alongside it.
    pub async fn json(res: Response) -> Result<(u16, Value), reqwest::Error> {
        let status = res.status().as_u16();
        let body = res.json::<Value>().await?;
        Ok((status, body))
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.gateway_url, path))
            .query(query)
            .send()
            .await
    }
}

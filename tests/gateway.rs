//! End-to-end tests for the gateway routes.

use arena_sdk::{ArenaClient, PredictionRequest};
use serde_json::json;

mod common;

const MARKETS_BODY: &str = r#"{"markets":[{"ticker":"KXBTC-25","yes_bid":41}],"cursor":""}"#;

#[tokio::test]
async fn test_root_needs_no_upstream() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = ArenaClient::new(&url);

    let (status, body) = ArenaClient::json(client.status().await.unwrap()).await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "Prophet Arena API Running" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_events_forwards_paging_and_bearer_token() {
    let (upstream, captured) = common::start_mock_upstream(200, MARKETS_BODY).await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = ArenaClient::new(&url);

    let (status, body) = ArenaClient::json(client.events(Some(5), Some(10)).await.unwrap())
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::from_str::<serde_json::Value>(MARKETS_BODY).unwrap());

    assert_eq!(
        captured.single_request_line(),
        "GET /v1/markets?limit=5&offset=10 HTTP/1.1"
    );
    let head = captured.heads()[0].to_lowercase();
    assert!(head.contains("authorization: bearer test-key"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_events_defaults_to_first_page_of_twenty() {
    let (upstream, captured) = common::start_mock_upstream(200, MARKETS_BODY).await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;

    let res = ArenaClient::new(&url).events(None, None).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        captured.single_request_line(),
        "GET /v1/markets?limit=20&offset=0 HTTP/1.1"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_markets_ticker_is_conditional() {
    let (upstream, captured) = common::start_mock_upstream(200, MARKETS_BODY).await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = ArenaClient::new(&url);

    assert_eq!(client.markets(None).await.unwrap().status(), 200);
    assert_eq!(client.markets(Some("KXBTC-25")).await.unwrap().status(), 200);

    let lines: Vec<String> = captured
        .heads()
        .iter()
        .map(|h| h.lines().next().unwrap_or_default().to_string())
        .collect();
    assert!(lines.contains(&"GET /v1/markets HTTP/1.1".to_string()));
    assert!(lines.contains(&"GET /v1/markets?ticker=KXBTC-25 HTTP/1.1".to_string()));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_error_status_is_passed_through_as_success() {
    let (upstream, _) = common::start_mock_upstream(404, r#"{"error":"not found"}"#).await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;

    let (status, body) = ArenaClient::json(ArenaClient::new(&url).markets(Some("NOPE")).await.unwrap())
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "error": "not found" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_leaderboard_is_fixed() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;

    let (status, body) = ArenaClient::json(ArenaClient::new(&url).leaderboard().await.unwrap())
        .await
        .unwrap();
    assert_eq!(status, 200);

    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 3);
    let ranks: Vec<i64> = models.iter().map(|m| m["rank"].as_i64().unwrap()).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(models[1]["name"], "Grok-4");
    assert_eq!(models[1]["return"], 0.864);

    shutdown.trigger();
}

#[tokio::test]
async fn test_predictions_echo_without_side_effects() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = ArenaClient::new(&url);

    let req = PredictionRequest {
        market_id: "KXFED-26".into(),
        probability: 1.5,
        rationale: None,
    };

    let (status, first) = ArenaClient::json(client.submit_prediction(&req).await.unwrap())
        .await
        .unwrap();
    let (_, second) = ArenaClient::json(client.submit_prediction(&req).await.unwrap())
        .await
        .unwrap();

    assert_eq!(status, 200);
    assert_eq!(first, second);
    assert_eq!(
        first,
        json!({
            "market_id": "KXFED-26",
            "probability": 1.5,
            "rationale": null,
            "status": "recorded"
        })
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{}/", url)).send().await.unwrap();
    let generated = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(!generated.is_empty());

    let res = client
        .get(format!("{}/", url))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "abc-123");

    shutdown.trigger();
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_with_credentials() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/leaderboard", url))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "x-custom")
        .send()
        .await
        .unwrap();

    assert!(res.status().is_success());
    let headers = res.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get("access-control-allow-credentials").unwrap(), "true");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("{}/api/nope", url)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_body_is_returned_byte_for_byte() {
    const BODY: &str =
        r#"{"markets":[{"ticker":"KXBTC-25","yes_bid":41}],"cursor":"","big":12345678901234567890123}"#;
    let (upstream, _) = common::start_mock_upstream(200, BODY).await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = ArenaClient::new(&url);

    let res = client.events(None, None).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(res.text().await.unwrap(), BODY);

    let res = client.markets(Some("KXBTC-25")).await.unwrap();
    assert_eq!(res.text().await.unwrap(), BODY);

    shutdown.trigger();
}

#[tokio::test]
async fn test_predictions_accept_query_parameters() {
    let upstream = common::closed_port().await;
    let (url, shutdown) = common::start_gateway(common::config_for(upstream)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .post(format!("{}/api/predictions", url))
        .query(&[
            ("market_id", "KXFED-26"),
            ("probability", "0.25"),
            ("rationale", "cuts"),
        ])
        .send()
        .await
        .unwrap();

    let (status, body) = ArenaClient::json(res).await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "market_id": "KXFED-26",
            "probability": 0.25,
            "rationale": "cuts",
            "status": "recorded"
        })
    );

    shutdown.trigger();
}

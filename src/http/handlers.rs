//! Route handlers.

use axum::{
    extract::{FromRequest, Query, Request, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::value::RawValue;

use crate::arena::{
    self, EventsQuery, Leaderboard, MarketsQuery, PredictionReceipt, PredictionSubmission,
    ServiceStatus,
};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `GET /`
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus::default())
}

/// `GET /api/events`: upstream markets page, passed through verbatim.
pub async fn events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    Ok(Json(state.upstream.fetch_events(&query).await?))
}

/// `GET /api/markets`: upstream markets, optionally by ticker, verbatim.
pub async fn markets(
    State(state): State<AppState>,
    Query(query): Query<MarketsQuery>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    Ok(Json(state.upstream.fetch_markets(&query).await?))
}

/// `GET /api/leaderboard`
pub async fn leaderboard() -> Json<Leaderboard> {
    Json(arena::leaderboard())
}

/// `POST /api/predictions`: echo with a fixed status. Nothing is stored.
///
/// Fields come from the query string when one is present, otherwise from
/// a JSON body.
pub async fn submit_prediction(request: Request) -> Result<Json<PredictionReceipt>, Response> {
    let submission = if request.uri().query().is_some_and(|q| !q.is_empty()) {
        let Query(submission) = Query::<PredictionSubmission>::try_from_uri(request.uri())
            .map_err(IntoResponse::into_response)?;
        submission
    } else {
        let Json(submission) = Json::<PredictionSubmission>::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        submission
    };

    tracing::debug!(market_id = %submission.market_id, "Prediction received");
    Ok(Json(PredictionReceipt::from(submission)))
}

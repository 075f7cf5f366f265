use crate::metrics::MetricsSnapshot;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Liveness payload: the health flag plus the metrics snapshot.
#[derive(Debug, serde::Serialize)]
pub struct AliveResponse {
    pub alive: bool,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
}

/// Liveness and metrics endpoint
///
/// Consults the pluggable resource check first: an unhealthy report
/// short-circuits to 503 carrying only `{"alive": false}`. Otherwise the
/// response is 200 with the full metrics snapshot, where fields that have
/// no value yet serialize as explicit nulls.
pub async fn is_alive(State(state): State<AppState>) -> Response {
    if !state.resource_check.healthy() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "alive": false })),
        )
            .into_response();
    }

    let metrics = state.metrics.snapshot(chrono::Utc::now());

    Json(AliveResponse {
        alive: true,
        metrics,
    })
    .into_response()
}

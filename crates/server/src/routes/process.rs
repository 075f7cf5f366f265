use crate::error::ApiError;
use crate::schema::validate_request;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::time::Instant;

/// Response from processing a single image.
///
/// Extraction failures after successful validation are folded into a 200
/// response with an `error` field instead of a distinct HTTP status: the
/// request itself was well-formed and the service handled it, the image
/// just could not be analyzed. Clients dispatch on the presence of `error`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    /// Extraction succeeded; serializes as the feature payload itself.
    Features(features::ImageFeatures),
    /// Extraction failed; serializes as `{"error": "<cause>"}`.
    Error { error: String },
}

/// Extract features from the image named by the request body.
///
/// # Pipeline Stages
/// 1. **Arrival**: The message time is recorded before anything is parsed,
///    so even rejected requests leave a trace in the metrics record.
/// 2. **Validate**: The body is checked against the static schema. Failures
///    exit with 400 before any file is touched.
/// 3. **Extract**: Decoding and feature math run on the blocking pool;
///    the async worker stays free while large images decode.
/// 4. **Account**: Both extraction outcomes count as a processed request
///    and fold into the shared metrics record under one short lock.
/// 5. **Respond**: 200 with the feature payload or the embedded error. A
///    panic in the extraction task is the one path that maps to 500, and it
///    is not counted as processed.
///
/// # Example
/// ```json
/// // Request
/// {
///   "image path": "/data/photos/cat.jpg"
/// }
///
/// // Response (success)
/// {
///   "histogram_vector": [0.0, 0.013, ...],
///   "phash": "d1c4d1c4b2e0a093"
/// }
///
/// // Response (extraction failure, still 200)
/// {
///   "error": "failed to open image /data/photos/cat.jpg: ..."
/// }
/// ```
pub async fn process_image(State(state): State<AppState>, body: Bytes) -> Response {
    state.metrics.record_message(Utc::now());

    let request = match validate_request(&body) {
        Ok(request) => request,
        Err(err) => {
            state
                .metrics
                .record_error(String::from_utf8_lossy(&body).into_owned());
            return err.into_response();
        }
    };

    let started_at = Utc::now();
    let timer = Instant::now();

    let config = state.features.clone();
    let path = request.image_path.clone();
    let outcome = tokio::task::spawn_blocking(move || features::extract_features(&path, &config));

    let payload = match outcome.await {
        Ok(Ok(extracted)) => ProcessResponse::Features(extracted),
        Ok(Err(err)) => {
            tracing::warn!(
                path = %request.image_path,
                error = %err,
                "feature extraction failed"
            );
            ProcessResponse::Error {
                error: err.to_string(),
            }
        }
        Err(join_err) => {
            // The extraction task panicked. Keep the offending body around
            // for diagnostics but do not count the request as processed.
            tracing::error!(
                path = %request.image_path,
                error = %join_err,
                "feature extraction task failed"
            );
            state
                .metrics
                .record_error(String::from_utf8_lossy(&body).into_owned());
            return ApiError::Internal(format!("feature extraction task failed: {join_err}"))
                .into_response();
        }
    };

    let elapsed_ms = timer.elapsed().as_secs_f64() * 1000.0;
    state
        .metrics
        .record_processed(started_at, elapsed_ms, request.raw);

    Json(payload).into_response()
}

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Usage documentation for the processing endpoint
///
/// Static payload describing how to call `POST /process`; requires no input
/// and never fails.
///
/// # Response
///
/// ```json
/// {
///   "description": "...",
///   "curl_example": "...",
///   "expected_response": "..."
/// }
/// ```
pub async fn howto() -> impl IntoResponse {
    Json(json!({
        "description": "To use the /process endpoint, send a JSON POST request with an \"image path\" field naming a readable image file. Here's an example of how to do this with curl:",
        "curl_example": "curl -X POST -H \"Content-Type: application/json\" -d '{\"image path\": \"/tmp/sample.jpg\"}' http://localhost:8000/process",
        "expected_response": "{\"histogram_vector\": [...], \"phash\": \"...\"}",
    }))
}

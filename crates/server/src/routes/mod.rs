//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the imgsig
//! server. Routes are organized by functionality:
//!
//! - `howto`: Usage documentation for the processing endpoint
//! - `process`: Image feature extraction
//! - `health`: Liveness and request metrics

pub mod health;
pub mod howto;
pub mod process;

use crate::error::ApiError;
use axum::http::Uri;

/// 404 Not Found handler
///
/// Returns the standard error envelope for undefined routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

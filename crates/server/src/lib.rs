//! imgsig Server - HTTP REST API for image feature extraction
//!
//! This crate provides an HTTP server that exposes imgsig feature
//! extraction via a REST API. It supports:
//!
//! - **Image Processing**: Extract a perceptual hash and a normalized
//!   histogram vector from an image file on disk
//! - **Usage Documentation**: A self-describing endpoint for client authors
//! - **Liveness & Metrics**: A liveness probe carrying the process-wide
//!   request metrics record
//!
//! # Features
//!
//! - **Middleware**: Body size limits, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Stable error kinds with per-request detail messages
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /process` - Extract features from the image named in the body
//! - `GET /howto` - Usage documentation for `/process`
//! - `GET /is_alive` - Liveness probe with request metrics
//!
//! Validation failures return 400 with a stable `error` kind; extraction
//! failures after successful validation return 200 with an embedded
//! `error` field, which is the service's long-standing wire contract.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use metrics::{MetricsSnapshot, ProcessMetrics};
pub use server::{build_router, start_server};
pub use state::{AppState, ResourceCheck};

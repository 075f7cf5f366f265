//! imgsig Server - HTTP REST API for image feature extraction
//!
//! This binary provides the HTTP server exposing imgsig feature extraction
//! via REST endpoints.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}

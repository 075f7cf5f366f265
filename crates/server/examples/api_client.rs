//! Examples for using the imgsig Server API
//!
//! Run the server first, then:
//!
//! ```sh
//! cargo run --example api_client -- /path/to/image.jpg
//! ```

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/sample.jpg".to_string());

    let client = Client::new();

    // Example 1: Usage documentation
    println!("1. Usage Documentation:");
    let resp = client.get(format!("{SERVER_URL}/howto")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Process an image
    println!("2. Process Image:");
    let resp = client
        .post(format!("{SERVER_URL}/process"))
        .json(&json!({ "image path": image_path }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Schema violation (missing the required field)
    println!("3. Schema Violation:");
    let resp = client
        .post(format!("{SERVER_URL}/process"))
        .json(&json!({ "path": image_path }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Malformed JSON
    println!("4. Malformed JSON:");
    let resp = client
        .post(format!("{SERVER_URL}/process"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Liveness and metrics
    println!("5. Liveness:");
    let resp = client.get(format!("{SERVER_URL}/is_alive")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}

//! Document loading: file path, URL, or stdin.

use std::io::Read;
use std::time::Duration;

use seascribe_core::{Error, Result};
use serde_json::Value;
use tracing::debug;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load a request document from a file path, an `http(s)://` URL, or `-`
/// for stdin.
pub async fn load_document(source: &str) -> Result<Value> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| Error::Input(format!("Error reading stdin: {}", e)))?;
        parse_json(&content, "stdin")
    } else if source.starts_with("http://") || source.starts_with("https://") {
        fetch_document(source).await
    } else {
        let content = std::fs::read_to_string(source)
            .map_err(|e| Error::Input(format!("Cannot read {}: {}", source, e)))?;
        parse_json(&content, source)
    }
}

/// Fetch a JSON document from a URL endpoint. Non-2xx statuses and
/// unparseable bodies are errors.
pub async fn fetch_document(url: &str) -> Result<Value> {
    debug!("Fetching document from {}", url);

    let response = reqwest::Client::new()
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Http(format!("Failed to fetch from URL {}: {}", url, e)))?;

    response
        .json()
        .await
        .map_err(|e| Error::Input(format!("Invalid JSON response from {}: {}", url, e)))
}

fn parse_json(content: &str, source: &str) -> Result<Value> {
    serde_json::from_str(content)
        .map_err(|e| Error::Input(format!("Invalid JSON from {}: {}", source, e)))
}

//! Non-streaming Anthropic Messages API client.

use reqwest::Client;
use seascribe_core::{Error, Result};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::GenerationConfig;

/// Generation-service client. The API key is resolved at call time, so a
/// process without credentials still boots and surfaces the problem through
/// the error envelope of whichever request first needs it.
pub struct NarrativeClient {
    http: Client,
    api_key: Option<String>,
}

impl NarrativeClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    /// Read the API key from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("ANTHROPIC_API_KEY").ok())
    }

    /// Send one prompt and return the complete reply text.
    pub async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("ANTHROPIC_API_KEY is not set".to_string()))?;

        debug!("Requesting {} with model {}", config.endpoint, config.model);

        let response = self
            .http
            .post(&config.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&request_body(prompt, config))
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!("API error {}: {}", status, body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("Malformed reply: {}", e)))?;

        reply_text(&body)
    }
}

/// Build the Messages API request: a single user message holding the prompt.
fn request_body(prompt: &str, config: &GenerationConfig) -> Value {
    json!({
        "model": config.model,
        "max_tokens": config.max_tokens,
        "messages": [{"role": "user", "content": prompt}],
    })
}

/// Pull the reply text out of a Messages API response body.
fn reply_text(body: &Value) -> Result<String> {
    body["content"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Generation("Malformed reply: missing content text".to_string()))
}

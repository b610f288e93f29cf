//! Server and generation configuration.

use serde::{Deserialize, Serialize};

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Reply token budget used when a request does not set one.
pub const DEFAULT_MAX_TOKENS: usize = 4096;

/// Instruction text placed in front of the extracted maritime data.
pub const DEFAULT_PROMPT_PREFIX: &str = "For each location, write exactly 3 \
compelling sentences in present tense and active voice as if we are currently \
at that specific location, focusing on its unique characteristics and features \
while enjoying the maritime conditions and surroundings: ";

/// Top-level Seascribe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
    /// Default generation model.
    pub model: String,
    /// Default reply token budget.
    pub max_tokens: usize,
    /// Default instruction prefix for composed prompts.
    pub prompt_prefix: String,
}

impl ServerConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);
        let model =
            std::env::var("SEASCRIBE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = std::env::var("SEASCRIBE_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        Self {
            port,
            model,
            max_tokens,
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
        }
    }
}

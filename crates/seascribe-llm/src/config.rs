//! Per-request generation settings.

use seascribe_core::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Messages API endpoint used when a request does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Settings for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub max_tokens: usize,
    pub endpoint: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

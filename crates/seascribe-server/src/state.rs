//! Shared application state.

use seascribe_core::ServerConfig;
use seascribe_llm::{GenerationConfig, NarrativeClient, DEFAULT_ENDPOINT};

/// State shared by all route handlers. Components hold no per-request
/// state, so requests need no coordination beyond this read-only handle.
pub struct AppState {
    pub config: ServerConfig,
    pub client: NarrativeClient,
}

impl AppState {
    pub fn new(config: ServerConfig, client: NarrativeClient) -> Self {
        Self { config, client }
    }

    /// Per-request generation settings: request overrides on top of the
    /// server defaults.
    pub fn generation_config(
        &self,
        model: Option<String>,
        max_tokens: Option<usize>,
        endpoint: Option<String>,
    ) -> GenerationConfig {
        GenerationConfig {
            model: model.unwrap_or_else(|| self.config.model.clone()),
            max_tokens: max_tokens.unwrap_or(self.config.max_tokens),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

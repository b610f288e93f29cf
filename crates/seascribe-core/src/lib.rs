//! Seascribe Core — error taxonomy and configuration.

pub mod config;
pub mod error;

pub use config::{ServerConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PROMPT_PREFIX};
pub use error::{Error, Result};

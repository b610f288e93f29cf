//! Seascribe LLM — the external text-generation collaborator.
//!
//! One prompt string in, one reply string out. No retries, timeouts, or
//! cancellation here; failures are surfaced once to the caller.

pub mod client;
pub mod config;

pub use client::NarrativeClient;
pub use config::{GenerationConfig, DEFAULT_ENDPOINT};

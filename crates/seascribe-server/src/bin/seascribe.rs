//! Seascribe CLI — one-shot narrative generation from a JSON document.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seascribe_core::config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PROMPT_PREFIX};
use seascribe_llm::{GenerationConfig, NarrativeClient, DEFAULT_ENDPOINT};
use seascribe_narrate::ResponseEnvelope;

/// Generate maritime narratives from a JSON document.
#[derive(Debug, Parser)]
#[command(name = "seascribe", version)]
struct Args {
    /// JSON file path, URL (http/https), or "-" for stdin.
    input: String,

    /// Model to use.
    #[arg(long, short = 'm', default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum tokens in the reply.
    #[arg(long, short = 't', default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// Generation service endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Output file (default: stdout).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Prefix placed before the extracted maritime data.
    #[arg(long, default_value = DEFAULT_PROMPT_PREFIX)]
    prompt_prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = GenerationConfig {
        model: args.model,
        max_tokens: args.max_tokens,
        endpoint: args.endpoint,
    };

    // Every failure ends up as an error envelope, never a bare error.
    let envelope = match seascribe_runtime::load_document(&args.input).await {
        Ok(document) => {
            let client = NarrativeClient::from_env();
            seascribe_runtime::run(&client, &document, &args.prompt_prefix, &config).await
        }
        Err(e) => ResponseEnvelope::error(&config.model, e.to_string()),
    };

    let output_json = serde_json::to_string_pretty(&envelope)?;
    match args.output {
        Some(path) => std::fs::write(path, output_json)?,
        None => println!("{}", output_json),
    }

    Ok(())
}

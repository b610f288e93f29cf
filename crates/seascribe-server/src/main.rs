//! Seascribe — maritime narrative generation server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seascribe_core::ServerConfig;
use seascribe_llm::NarrativeClient;
use seascribe_server::routes;
use seascribe_server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let port = config.port;

    let client = NarrativeClient::from_env();
    if std::env::var("ANTHROPIC_API_KEY").is_err() {
        warn!("ANTHROPIC_API_KEY is not set; generation requests will fail");
    }

    let state = Arc::new(AppState::new(config, client));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Seascribe server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

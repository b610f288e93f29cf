//! Narrative generation routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use seascribe_narrate::{ResponseEnvelope, ResponseStatus};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", post(generate))
        .route("/generate-from-url", post(generate_from_url))
}

/// Request carrying the document inline.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: Value,
    pub prompt_prefix: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<usize>,
    pub endpoint: Option<String>,
}

/// Request pointing at a document to fetch first.
#[derive(Debug, Deserialize)]
pub struct GenerateFromUrlRequest {
    pub url: String,
    pub prompt_prefix: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<usize>,
    pub endpoint: Option<String>,
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    let config = state.generation_config(req.model, req.max_tokens, req.endpoint);
    let prefix = req
        .prompt_prefix
        .unwrap_or_else(|| state.config.prompt_prefix.clone());

    let envelope = seascribe_runtime::run(&state.client, &req.data, &prefix, &config).await;
    respond(envelope)
}

async fn generate_from_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateFromUrlRequest>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    let config = state.generation_config(req.model, req.max_tokens, req.endpoint);
    let prefix = req
        .prompt_prefix
        .unwrap_or_else(|| state.config.prompt_prefix.clone());

    // A fetch failure is the caller's fault, not the pipeline's.
    let document = match seascribe_runtime::fetch_document(&req.url).await {
        Ok(document) => document,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ResponseEnvelope::error(&config.model, e.to_string())),
            );
        }
    };

    let envelope = seascribe_runtime::run(&state.client, &document, &prefix, &config).await;
    respond(envelope)
}

/// Success envelopes go out as 200; pipeline error envelopes as 500. The
/// body is the well-formed envelope either way.
fn respond(envelope: ResponseEnvelope) -> (StatusCode, Json<ResponseEnvelope>) {
    let status = match envelope.status {
        ResponseStatus::Success => StatusCode::OK,
        ResponseStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(envelope))
}

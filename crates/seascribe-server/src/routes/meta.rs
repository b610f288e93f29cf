//! Service info and health endpoints.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
}

async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Seascribe Maritime Narrative API",
        "status": "active",
        "endpoints": {
            "/generate": "POST - Generate narrative from JSON data",
            "/generate-from-url": "POST - Generate narrative from URL endpoint",
            "/health": "GET - Health check",
        },
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "seascribe",
    }))
}

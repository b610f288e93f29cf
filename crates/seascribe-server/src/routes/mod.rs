//! HTTP route handlers.

pub mod generate;
pub mod meta;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(meta::routes())
        .merge(generate::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

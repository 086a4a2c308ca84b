pub mod api;
pub mod config;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the Axum router with all routes
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/process", get(api::process))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub mod api;
pub mod config;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Build the Axum router with all routes
pub fn build_router() -> Router {
    Router::new()
        .route("/data", get(api::get_data))
        .layer(CorsLayer::permissive())
}

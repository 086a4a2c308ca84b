use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, info, warn};

use relay_messages::{ErrorMessage, HealthMessage, ProcessedMessage};

use crate::state::AppState;

/// Manually trigger one consume cycle against the processor.
///
/// The upstream body is passed through verbatim so callers see exactly
/// what the processor returned.
pub async fn consume(State(state): State<Arc<AppState>>) -> Response {
    match state.processor.get_text("/process").await {
        Ok(body) => {
            match serde_json::from_str::<ProcessedMessage>(&body) {
                Ok(msg) => {
                    info!(original = msg.original, processed = msg.processed, "manual consume");
                }
                Err(e) => warn!(error = %e, "manual consume returned unexpected body"),
            }
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "could not reach processor");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage::new("Failed to call Processor service")),
            )
                .into_response()
        }
    }
}

/// Liveness check. Never touches the upstream services.
pub async fn health() -> Json<HealthMessage> {
    Json(HealthMessage::healthy("consumer"))
}

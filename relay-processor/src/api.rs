use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{error, info};

use relay_messages::{DataMessage, ErrorMessage, ProcessedMessage};

use crate::state::AppState;

/// Fetch a value from the producer and double it.
///
/// Any upstream failure (unreachable, non-200, malformed body) collapses
/// to a 500 with a generic error body; there are no retries.
pub async fn process(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProcessedMessage>, (StatusCode, Json<ErrorMessage>)> {
    let data: DataMessage = state.producer.get_json("/data").await.map_err(|e| {
        error!(error = %e, "could not reach producer");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage::new("Failed to call Producer service")),
        )
    })?;

    let processed = data.value * 2;
    info!(original = data.value, processed, "processed value");

    Ok(Json(ProcessedMessage {
        original: data.value,
        processed,
    }))
}

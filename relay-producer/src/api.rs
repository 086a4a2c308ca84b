use axum::response::Json;
use rand::Rng;
use tracing::info;

use relay_messages::DataMessage;

/// Generate one value, uniform over [1,100]. Each call draws from the
/// thread-local generator, so values are independent across requests.
pub async fn get_data() -> Json<DataMessage> {
    let value = rand::thread_rng().gen_range(1..=100);
    info!(value, "generated value");
    Json(DataMessage { value })
}

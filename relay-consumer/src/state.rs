use std::sync::Arc;

use relay_messages::UpstreamClient;

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Client for the upstream processor service
    pub processor: UpstreamClient,
}

impl AppState {
    pub fn new(processor: UpstreamClient) -> Arc<Self> {
        Arc::new(Self { processor })
    }
}

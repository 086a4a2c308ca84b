use std::sync::Arc;

use relay_messages::UpstreamClient;

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Client for the upstream producer service
    pub producer: UpstreamClient,
}

impl AppState {
    pub fn new(producer: UpstreamClient) -> Arc<Self> {
        Arc::new(Self { producer })
    }
}

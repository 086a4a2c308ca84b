use std::net::SocketAddr;

use tracing::info;

use relay_messages::UpstreamClient;
use relay_processor::config::ProcessorConfig;
use relay_processor::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ProcessorConfig::from_env()?;
    info!(port = config.port, producer_url = %config.producer_url(), "loaded config");

    let state = AppState::new(UpstreamClient::with_base_url(config.producer_url()));
    let app = relay_processor::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("processor listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

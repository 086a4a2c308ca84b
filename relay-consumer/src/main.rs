use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use tracing::info;

use relay_consumer::config::ConsumerConfig;
use relay_consumer::poller;
use relay_consumer::state::AppState;
use relay_messages::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ConsumerConfig::from_env()?;
    info!(
        port = config.port,
        processor_url = %config.processor_url(),
        poll_interval_secs = config.poll_interval_seconds,
        "loaded config"
    );

    let processor = UpstreamClient::with_base_url(config.processor_url());
    let state = AppState::new(processor.clone());
    let app = relay_consumer::build_router(state);

    let cancel = CancellationToken::new();
    let poller_handle = poller::spawn_poller(
        processor,
        poller::STARTUP_DELAY,
        config.poll_interval(),
        cancel.clone(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("consumer listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received ctrl-c, shutting down");
            shutdown.cancel();
        }
    });

    let server_cancel = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { server_cancel.cancelled().await })
        .await?;

    cancel.cancel();
    poller_handle.await.ok();
    info!("consumer stopped");

    Ok(())
}

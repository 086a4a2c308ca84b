use std::net::SocketAddr;

use relay_producer::config::ProducerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ProducerConfig::from_env()?;
    let app = relay_producer::build_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("producer listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use relay_messages::{ProcessedMessage, UpstreamClient};

/// Delay before the first poll, giving the HTTP listener time to come up.
pub const STARTUP_DELAY: Duration = Duration::from_secs(1);

/// Spawn a background task that polls the processor on a fixed interval.
///
/// Returns the JoinHandle for the polling task. The task waits
/// `startup_delay`, then polls, sleeps `interval` and repeats until the
/// cancellation token is cancelled. Poll failures are logged and the
/// loop continues with the next interval.
pub fn spawn_poller(
    processor: UpstreamClient,
    startup_delay: Duration,
    interval: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("poller stopping before first poll");
                return;
            }
            _ = tokio::time::sleep(startup_delay) => {}
        }

        loop {
            match processor.get_json::<ProcessedMessage>("/process").await {
                Ok(msg) => {
                    info!(
                        original = msg.original,
                        processed = msg.processed,
                        "consumed from processor"
                    );
                }
                Err(e) => {
                    error!(error = %e, "failed to call processor");
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("poller stopping");
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_poller_polls_processor_until_cancelled() {
        let server = MockServer::start();
        let processor = server.mock(|when, then| {
            when.method(GET).path("/process");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"original": 10, "processed": 20}));
        });

        let cancel = CancellationToken::new();
        let handle = spawn_poller(
            UpstreamClient::with_base_url(server.base_url()),
            Duration::ZERO,
            Duration::from_millis(10),
            cancel.clone(),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert!(processor.hits() >= 1);
    }

    #[tokio::test]
    async fn test_poller_survives_upstream_failure() {
        // Nothing listens on port 1; every poll fails.
        let cancel = CancellationToken::new();
        let handle = spawn_poller(
            UpstreamClient::with_base_url("http://127.0.0.1:1"),
            Duration::ZERO,
            Duration::from_millis(10),
            cancel.clone(),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!handle.is_finished());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_poller_cancellation_during_startup_delay() {
        let cancel = CancellationToken::new();
        let handle = spawn_poller(
            UpstreamClient::with_base_url("http://127.0.0.1:1"),
            Duration::from_secs(60),
            Duration::from_secs(60),
            cancel.clone(),
        );

        cancel.cancel();
        handle.await.unwrap();
    }
}

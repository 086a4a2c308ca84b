use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_PROCESSOR_HOST: &str = "processor";
const DEFAULT_PROCESSOR_PORT: u16 = 8081;
const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;

/// Consumer configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    pub port: u16,
    pub processor_host: String,
    pub processor_port: u16,
    pub poll_interval_seconds: u64,
}

impl ConsumerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::build(
            std::env::var("PORT").ok(),
            std::env::var("PROCESSOR_HOST").ok(),
            std::env::var("PROCESSOR_PORT").ok(),
            std::env::var("POLL_INTERVAL_SECONDS").ok(),
        )
    }

    /// Build config from resolved values (after env lookup).
    fn build(
        port: Option<String>,
        processor_host: Option<String>,
        processor_port: Option<String>,
        poll_interval_seconds: Option<String>,
    ) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value '{}'", raw))?,
            None => DEFAULT_PORT,
        };
        let processor_host = processor_host
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_PROCESSOR_HOST.to_string());
        let processor_port = match processor_port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PROCESSOR_PORT value '{}'", raw))?,
            None => DEFAULT_PROCESSOR_PORT,
        };
        let poll_interval_seconds = match poll_interval_seconds {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid POLL_INTERVAL_SECONDS value '{}'", raw))?,
            None => DEFAULT_POLL_INTERVAL_SECONDS,
        };

        Ok(Self {
            port,
            processor_host,
            processor_port,
            poll_interval_seconds,
        })
    }

    /// Base URL of the processor service.
    pub fn processor_url(&self) -> String {
        format!("http://{}:{}", self.processor_host, self.processor_port)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

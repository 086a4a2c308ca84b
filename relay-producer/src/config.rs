use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;

/// Producer configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    pub port: u16,
}

impl ProducerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::build(std::env::var("PORT").ok())
    }

    /// Build config from resolved values (after env lookup).
    fn build(port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value '{}'", raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

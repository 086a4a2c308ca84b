use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_PRODUCER_HOST: &str = "producer";
const DEFAULT_PRODUCER_PORT: u16 = 8080;

/// Processor configuration, read from the environment at startup.
///
/// The producer address resolved here is the one the outbound call is
/// actually made against.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub port: u16,
    pub producer_host: String,
    pub producer_port: u16,
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::build(
            std::env::var("PORT").ok(),
            std::env::var("PRODUCER_HOST").ok(),
            std::env::var("PRODUCER_PORT").ok(),
        )
    }

    /// Build config from resolved values (after env lookup).
    fn build(
        port: Option<String>,
        producer_host: Option<String>,
        producer_port: Option<String>,
    ) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value '{}'", raw))?,
            None => DEFAULT_PORT,
        };
        let producer_host = producer_host
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCER_HOST.to_string());
        let producer_port = match producer_port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PRODUCER_PORT value '{}'", raw))?,
            None => DEFAULT_PRODUCER_PORT,
        };

        Ok(Self {
            port,
            producer_host,
            producer_port,
        })
    }

    /// Base URL of the producer's data endpoint.
    pub fn producer_url(&self) -> String {
        format!("http://{}:{}", self.producer_host, self.producer_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the build() function directly to avoid env var mutation.

    #[test]
    fn test_build_defaults() {
        let config = ProcessorConfig::build(None, None, None).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.producer_host, "producer");
        assert_eq!(config.producer_port, 8080);
        assert_eq!(config.producer_url(), "http://producer:8080");
    }

    #[test]
    fn test_build_custom_producer_target() {
        let config = ProcessorConfig::build(
            Some("9081".to_string()),
            Some("10.0.0.5".to_string()),
            Some("9080".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 9081);
        assert_eq!(config.producer_url(), "http://10.0.0.5:9080");
    }

    #[test]
    fn test_build_empty_host_falls_back_to_default() {
        let config = ProcessorConfig::build(None, Some("".to_string()), None).unwrap();
        assert_eq!(config.producer_host, "producer");
    }

    #[test]
    fn test_build_rejects_non_numeric_port() {
        let err = ProcessorConfig::build(Some("x".to_string()), None, None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_build_rejects_non_numeric_producer_port() {
        let err =
            ProcessorConfig::build(None, None, Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PRODUCER_PORT"));
    }
}

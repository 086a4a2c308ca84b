use serde::{Deserialize, Serialize};

/// Payload emitted by the producer: one freshly generated value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DataMessage {
    pub value: i64,
}

/// Payload emitted by the processor: the producer's value and its double.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProcessedMessage {
    pub original: i64,
    pub processed: i64,
}

/// Generic error body returned when an upstream call fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Static health check body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthMessage {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthMessage {
    pub fn healthy(service: &'static str) -> Self {
        Self {
            status: "healthy",
            service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_message_parses_processor_body() {
        let msg: ProcessedMessage =
            serde_json::from_str(r#"{"original": 21, "processed": 42}"#).unwrap();
        assert_eq!(msg.original, 21);
        assert_eq!(msg.processed, 42);
    }

    #[test]
    fn test_error_message_shape() {
        let body = serde_json::to_value(ErrorMessage::new("Failed to call Producer service"))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Failed to call Producer service"})
        );
    }

    #[test]
    fn test_health_message_literals() {
        let body = serde_json::to_value(HealthMessage::healthy("consumer")).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "consumer");
    }
}

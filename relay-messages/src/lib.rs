//! Shared layer for the relay pipeline services
//!
//! Every service exchanges the same small JSON payloads; the processor
//! and consumer additionally call the next service up the chain through
//! [`UpstreamClient`]. Used by relay-producer, relay-processor and
//! relay-consumer.

pub mod client;
pub mod types;

pub use client::{UpstreamClient, UpstreamError};
pub use types::{DataMessage, ErrorMessage, HealthMessage, ProcessedMessage};

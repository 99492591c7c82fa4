//! Message sink contract.
//!
//! The publish loop drives any [`MessageSink`] implementation; the Kafka
//! sink lives in its own crate and tests substitute scripted in-memory
//! sinks.

use crate::values::Value;
use async_trait::async_trait;
use std::time::Duration;

/// Errors surfaced by a message sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The broker could not be reached or refused the session
    #[error("Failed to connect to broker: {0}")]
    Connection(String),

    /// A message could not be delivered
    #[error("Failed to publish to '{topic}': {reason}")]
    Publish {
        /// Topic the delivery was addressed to
        topic: String,
        /// Broker-side failure description
        reason: String,
    },

    /// In-flight deliveries were not acknowledged within the grace period
    #[error("{pending} message(s) unacknowledged after {grace:?}")]
    DrainTimeout {
        /// Grace period that elapsed
        grace: Duration,
        /// Number of deliveries still outstanding
        pending: usize,
    },
}

/// A destination for generated records.
///
/// `publish` may block when the sink's in-flight limit is reached; that is
/// flow control, not an error. `drain` waits for outstanding deliveries and
/// is called once while the loop shuts down.
#[async_trait]
pub trait MessageSink {
    /// Publish one message to `topic`, routed by `key`.
    ///
    /// A [`Value::Null`] key means the message carries no routing key and
    /// the broker is free to pick its partition.
    async fn publish(&mut self, topic: &str, key: &Value, payload: &[u8])
        -> Result<(), SinkError>;

    /// Wait for in-flight deliveries, bounded by `grace`.
    async fn drain(&mut self, grace: Duration) -> Result<(), SinkError>;
}

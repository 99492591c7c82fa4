//! Kafka sink implementation.
//!
//! Publishes run through a [`FutureProducer`] with a bounded in-flight
//! window: each publish enqueues a delivery future, and once the window is
//! full the next publish first waits for the oldest delivery to complete.
//! With the default window of 1 every message is acknowledged before the
//! next is sent.

use async_trait::async_trait;
use datagen_core::{MessageSink, SinkError, Value};
use rdkafka::producer::{DeliveryFuture, FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::collections::VecDeque;
use std::time::Duration;

/// Connection settings for the Kafka sink.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Broker addresses (e.g., "localhost:9092")
    pub brokers: String,

    /// SASL/PLAIN username; credentials are only applied when both the
    /// username and password are present
    pub username: Option<String>,

    /// SASL/PLAIN password
    pub password: Option<String>,

    /// Pending-delivery depth at which publish blocks
    pub max_in_flight: usize,

    /// Per-message delivery timeout enforced by the client
    pub message_timeout: Duration,

    /// How long to wait for broker metadata when connecting
    pub connect_timeout: Duration,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            username: None,
            password: None,
            max_in_flight: 1,
            message_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Kafka message sink with a bounded in-flight window.
pub struct KafkaSink {
    producer: FutureProducer,
    pending: VecDeque<(String, DeliveryFuture)>,
    max_in_flight: usize,
}

impl KafkaSink {
    /// Connect to Kafka.
    ///
    /// Blocks until broker metadata is available, so a wrong address or bad
    /// credentials surface here instead of on the first publish.
    ///
    /// # Arguments
    ///
    /// * `config` - Broker addresses, credentials, and delivery settings
    pub fn connect(config: &SinkConfig) -> Result<Self, SinkError> {
        let producer: FutureProducer = build_client_config(config)
            .create()
            .map_err(|e| SinkError::Connection(e.to_string()))?;

        producer
            .client()
            .fetch_metadata(None, config.connect_timeout)
            .map_err(|e| SinkError::Connection(e.to_string()))?;

        tracing::info!("Connected to Kafka at {}", config.brokers);

        Ok(Self {
            producer,
            pending: VecDeque::new(),
            max_in_flight: config.max_in_flight.max(1),
        })
    }

    /// Number of publishes awaiting delivery confirmation.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl MessageSink for KafkaSink {
    async fn publish(&mut self, topic: &str, key: &Value, payload: &[u8]) -> Result<(), SinkError> {
        while self.pending.len() >= self.max_in_flight {
            let Some((pending_topic, future)) = self.pending.pop_front() else {
                break;
            };
            await_delivery(&pending_topic, future).await?;
        }

        let key_bytes = routing_key_bytes(key);
        let mut record = FutureRecord::<Vec<u8>, _>::to(topic).payload(payload);
        if let Some(bytes) = &key_bytes {
            record = record.key(bytes);
        }

        let future = self
            .producer
            .send_result(record)
            .map_err(|(err, _)| SinkError::Publish {
                topic: topic.to_string(),
                reason: err.to_string(),
            })?;
        self.pending.push_back((topic.to_string(), future));

        tracing::debug!("Queued message for topic '{topic}'");
        Ok(())
    }

    async fn drain(&mut self, grace: Duration) -> Result<(), SinkError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        tracing::info!(
            "Draining {} in-flight messages (grace {:?})",
            self.pending.len(),
            grace
        );

        let deadline = tokio::time::Instant::now() + grace;
        while let Some((topic, future)) = self.pending.pop_front() {
            match tokio::time::timeout_at(deadline, await_delivery(&topic, future)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(SinkError::DrainTimeout {
                        grace,
                        pending: self.pending.len() + 1,
                    });
                }
            }
        }

        Ok(())
    }
}

async fn await_delivery(topic: &str, future: DeliveryFuture) -> Result<(), SinkError> {
    match future.await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err((err, _))) => Err(SinkError::Publish {
            topic: topic.to_string(),
            reason: err.to_string(),
        }),
        Err(_) => Err(SinkError::Publish {
            topic: topic.to_string(),
            reason: "delivery notification dropped by producer".to_string(),
        }),
    }
}

fn build_client_config(config: &SinkConfig) -> ClientConfig {
    let mut client_config = ClientConfig::new();
    client_config
        .set("bootstrap.servers", &config.brokers)
        .set(
            "message.timeout.ms",
            config.message_timeout.as_millis().to_string(),
        );

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client_config
            .set("security.protocol", "sasl_plaintext")
            .set("sasl.mechanism", "PLAIN")
            .set("sasl.username", username)
            .set("sasl.password", password);
    }

    client_config
}

/// Turn a resolved key value into routing bytes.
///
/// Text keys route by their bytes and everything else by its display form.
/// A null key yields `None`: the message is sent without a key and the
/// broker assigns its partition.
pub fn routing_key_bytes(key: &Value) -> Option<Vec<u8>> {
    match key {
        Value::Null => None,
        Value::Text(text) => Some(text.clone().into_bytes()),
        other => Some(other.to_string().into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_basics() {
        let config = SinkConfig {
            brokers: "broker-1:9092,broker-2:9092".to_string(),
            ..SinkConfig::default()
        };

        let client_config = build_client_config(&config);
        assert_eq!(
            client_config.get("bootstrap.servers"),
            Some("broker-1:9092,broker-2:9092")
        );
        assert_eq!(client_config.get("message.timeout.ms"), Some("30000"));
        assert_eq!(client_config.get("security.protocol"), None);
    }

    #[test]
    fn test_client_config_with_credentials() {
        let config = SinkConfig {
            username: Some("datagen".to_string()),
            password: Some("secret".to_string()),
            ..SinkConfig::default()
        };

        let client_config = build_client_config(&config);
        assert_eq!(client_config.get("security.protocol"), Some("sasl_plaintext"));
        assert_eq!(client_config.get("sasl.mechanism"), Some("PLAIN"));
        assert_eq!(client_config.get("sasl.username"), Some("datagen"));
        assert_eq!(client_config.get("sasl.password"), Some("secret"));
    }

    #[test]
    fn test_credentials_require_both_halves() {
        let config = SinkConfig {
            username: Some("datagen".to_string()),
            password: None,
            ..SinkConfig::default()
        };

        let client_config = build_client_config(&config);
        assert_eq!(client_config.get("security.protocol"), None);
        assert_eq!(client_config.get("sasl.username"), None);
    }

    #[test]
    fn test_routing_key_bytes() {
        assert_eq!(
            routing_key_bytes(&Value::Text("west".to_string())),
            Some(b"west".to_vec())
        );
        assert_eq!(routing_key_bytes(&Value::Int(42)), Some(b"42".to_vec()));
        assert_eq!(routing_key_bytes(&Value::Bool(true)), Some(b"true".to_vec()));
        assert_eq!(routing_key_bytes(&Value::Null), None);
    }
}

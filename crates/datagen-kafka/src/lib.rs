//! Kafka implementation of the message sink.
//!
//! Wraps an [`rdkafka`] `FutureProducer` behind the
//! [`MessageSink`](datagen_core::MessageSink) contract: publish with a
//! bounded in-flight window, then drain outstanding deliveries under a
//! grace period at shutdown. Topics are addressed per message, so records
//! routed to different topics share one producer and one connection.

pub mod sink;

pub use sink::{routing_key_bytes, KafkaSink, SinkConfig};

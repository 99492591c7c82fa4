//! The generate-resolve-publish loop.
//!
//! Each iteration generates one record, resolves the routing key and topic
//! from it, serializes the record fields as JSON, publishes the message,
//! and then paces before the next iteration. The loop is fail-fast: the
//! first error from generation, resolution, or publish stops it. The one
//! recoverable condition is an interrupted pacing delay, which skips the
//! remaining wait and continues.

use crate::shutdown::{PacingInterrupted, ShutdownToken};
use datagen_core::{MessageSink, SinkError, Value};
use datagen_generator::{GeneratorError, RecordSource};
use datagen_template::{resolve_address, resolve_topic, TemplateError};
use std::time::Duration;
use tokio::time::Instant;

/// Lifecycle of the publish loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not yet run
    Idle,

    /// Publishing records
    Running,

    /// Stop observed; draining in-flight publishes
    Stopping,

    /// Drained and finished
    Terminated,
}

/// Error type for the publish loop.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    /// Record generation failed
    #[error("Failed to generate record: {0}")]
    Generation(#[from] GeneratorError),

    /// Template resolution failed against the live record
    #[error("Failed to resolve templates: {0}")]
    Template(#[from] TemplateError),

    /// Record could not be serialized into a payload
    #[error("Failed to serialize record payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The sink rejected or failed a publish
    #[error("Failed to publish record: {0}")]
    Sink(#[from] SinkError),
}

/// Statistics from a completed run.
#[derive(Debug, Clone, Default)]
pub struct PublishStats {
    /// Number of messages published
    pub messages_published: u64,

    /// Total time the loop ran, draining included
    pub total_duration: Duration,
}

impl PublishStats {
    /// Calculate messages per second.
    pub fn messages_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.messages_published as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives the publish loop over a record source and a message sink.
///
/// Shutdown is cooperative: the token is polled at the top of each
/// iteration, so a stop request never pre-empts an in-flight publish. On
/// exit the sink drains outstanding deliveries under the termination grace
/// period; a drain overrun is logged but never changes the run's outcome.
pub struct PublishLoop<G, S> {
    source: G,
    sink: S,
    topic_template: String,
    key_spec: Option<String>,
    publish_delay: Duration,
    termination_grace: Duration,
    message_count: Option<u64>,
    shutdown: ShutdownToken,
    state: LoopState,
}

impl<G: RecordSource, S: MessageSink> PublishLoop<G, S> {
    /// Create a new publish loop.
    ///
    /// # Arguments
    ///
    /// * `source` - Record source, called once per iteration
    /// * `sink` - Message sink receiving (topic, key, payload)
    /// * `topic_template` - Topic template, validated against the schema
    pub fn new(source: G, sink: S, topic_template: impl Into<String>) -> Self {
        Self {
            source,
            sink,
            topic_template: topic_template.into(),
            key_spec: None,
            publish_delay: Duration::from_secs(1),
            termination_grace: Duration::from_millis(500),
            message_count: None,
            shutdown: ShutdownToken::new(),
            state: LoopState::Idle,
        }
    }

    /// Route messages by this key specifier, a literal or one `{field}`
    /// placeholder. Without one every message is published with a null key.
    pub fn with_key_spec(mut self, key_spec: impl Into<String>) -> Self {
        self.key_spec = Some(key_spec.into());
        self
    }

    /// Set the delay between publishes.
    pub fn with_publish_delay(mut self, delay: Duration) -> Self {
        self.publish_delay = delay;
        self
    }

    /// Set the grace period for draining in-flight publishes on exit.
    pub fn with_termination_grace(mut self, grace: Duration) -> Self {
        self.termination_grace = grace;
        self
    }

    /// Stop after publishing this many messages.
    pub fn with_message_count(mut self, count: u64) -> Self {
        self.message_count = Some(count);
        self
    }

    /// Use an externally owned shutdown token.
    pub fn with_shutdown_token(mut self, token: ShutdownToken) -> Self {
        self.shutdown = token;
        self
    }

    /// The token that stops this loop.
    pub fn shutdown_token(&self) -> ShutdownToken {
        self.shutdown.clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run until the message budget is reached, shutdown is requested, or
    /// an error stops the loop.
    ///
    /// The sink is drained even when the loop stops on an error, so an
    /// already-queued publish is never abandoned mid-flight.
    pub async fn run(&mut self) -> Result<PublishStats, LoopError> {
        let started = Instant::now();
        self.state = LoopState::Running;

        let mut published = 0u64;
        let outcome = self.drive(&mut published).await;

        self.state = LoopState::Stopping;
        if let Err(e) = self.sink.drain(self.termination_grace).await {
            tracing::warn!("Drain on shutdown incomplete: {e}");
        }
        self.state = LoopState::Terminated;

        let stats = PublishStats {
            messages_published: published,
            total_duration: started.elapsed(),
        };

        match outcome {
            Ok(()) => {
                tracing::info!(
                    "Published {} messages in {:?} ({:.2} msg/sec)",
                    stats.messages_published,
                    stats.total_duration,
                    stats.messages_per_second()
                );
                Ok(stats)
            }
            Err(e) => {
                tracing::error!("Publish loop stopped after {published} messages: {e}");
                Err(e)
            }
        }
    }

    async fn drive(&mut self, published: &mut u64) -> Result<(), LoopError> {
        loop {
            // Stop conditions are only observed here, between iterations
            if self.shutdown.is_shutdown() {
                tracing::info!("Shutdown requested, stopping after {published} messages");
                return Ok(());
            }
            if let Some(count) = self.message_count {
                if *published >= count {
                    tracing::info!("Reached message count {count}");
                    return Ok(());
                }
            }

            let record = self.source.generate()?;
            let (topic, key) = match &self.key_spec {
                Some(key_spec) => {
                    let address = resolve_address(&self.topic_template, key_spec, &record)?;
                    (address.topic, address.key)
                }
                None => (resolve_topic(&self.topic_template, &record)?, Value::Null),
            };
            let payload = serde_json::to_vec(&record.fields)?;

            self.sink.publish(&topic, &key, &payload).await?;
            *published += 1;
            tracing::debug!("Published record {} to '{topic}'", record.index);

            if let Err(PacingInterrupted) = self.shutdown.pace(self.publish_delay).await {
                tracing::debug!("Pacing delay interrupted, continuing");
            }
        }
    }
}

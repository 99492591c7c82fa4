//! Datagen Library
//!
//! A library for generating randomized records from a YAML schema and
//! continuously publishing them to Kafka, with the topic and routing key of
//! each message derived from the record's own fields.
//!
//! # Features
//!
//! - Schema-driven generation: field generators for UUIDs, ranges, patterns,
//!   weighted booleans, pools, and timestamps
//! - Field-addressed topics: `{field}` placeholders in the topic template
//!   and key specifier, validated before anything connects
//! - Deterministic output: a seeded rng makes every run replayable
//! - Paced publishing: a configurable inter-publish delay with cooperative
//!   shutdown that never abandons an in-flight message
//!
//! # Component Crates
//!
//! - `datagen_core` - schema, record values, and the sink contract
//! - `datagen_generator` - seeded record generation
//! - `datagen_template` - placeholder grammar, validation, and resolution
//! - `datagen_kafka` - Kafka sink with a bounded in-flight window
//!
//! # CLI Usage
//!
//! ```bash
//! # Publish a sensor reading once per second until Ctrl+C
//! datagen --schema schemas/sensors.yaml --topic "sensors/{region}/reading" --key "{sensor_id}"
//!
//! # Publish 10000 order events keyed by order id
//! datagen --schema schemas/orders.yaml --topic orders --key "{order_id}" --count 10000
//! ```

pub mod config;
pub mod run;
pub mod shutdown;

pub use config::{BrokerOpts, DatagenOpts};
pub use run::{LoopError, LoopState, PublishLoop, PublishStats};
pub use shutdown::{install_ctrl_c_handler, PacingInterrupted, ShutdownToken};

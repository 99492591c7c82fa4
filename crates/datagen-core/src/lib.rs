//! Core types for the datagen record publisher.
//!
//! This crate provides the foundational types shared by the generator, the
//! template engine, and the sinks:
//!
//! - [`Schema`] - record schema loaded from YAML, with per-field generators
//! - [`Value`] - a generated field value and its canonical string form
//! - [`Record`] - one generator output, scoped to a single publish iteration
//! - [`MessageSink`] - the capability contract the publish loop drives
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    ├─── datagen-generator  (produces Records from a Schema)
//!    ├─── datagen-template   (validates/resolves {field} templates)
//!    └─── datagen-kafka      (implements MessageSink on rdkafka)
//! ```

pub mod schema;
pub mod sink;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldSchema, FieldType, GeneratorConfig, Schema, SchemaError};
pub use sink::{MessageSink, SinkError};
pub use values::{Record, RecordBuilder, Value};

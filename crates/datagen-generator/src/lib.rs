//! Deterministic record generation from schema definitions.
//!
//! This crate turns a [`Schema`](datagen_core::Schema) into an endless
//! stream of randomized records. Generation is driven by a seeded rng, so
//! a given schema and seed always produce the same sequence.
//!
//! Supported generator types:
//! - `uuid_v4` - random UUIDs
//! - `sequential` - monotonically increasing integers
//! - `pattern` - text with `{index}`, `{uuid}`, and `{rand:N}` substitutions
//! - `int_range` / `float_range` - uniform numeric ranges
//! - `timestamp_range` / `timestamp_now` - time values
//! - `weighted_bool` - biased coin flips
//! - `one_of` - pick one value from a list
//! - `sample_array` - sample a variable-length array from a pool
//! - `static` / `null` - fixed values

pub mod generator;
pub mod generators;

pub use generator::{DataGenerator, GeneratorError, RecordSource};

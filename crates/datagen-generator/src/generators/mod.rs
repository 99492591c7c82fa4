//! Value generators for each generator configuration.

pub mod array;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod timestamp;
pub mod uuid;

use datagen_core::schema::GeneratorConfig;
use datagen_core::values::Value;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Generate a value for the given generator configuration.
pub fn generate_value<R: Rng>(config: &GeneratorConfig, rng: &mut R, index: u64) -> Value {
    match config {
        GeneratorConfig::UuidV4 => uuid::generate_uuid_v4(rng),
        GeneratorConfig::Sequential { start } => Value::Int(start + index as i64),
        GeneratorConfig::Pattern { pattern } => pattern::generate_pattern(pattern, rng, index),
        GeneratorConfig::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),
        GeneratorConfig::FloatRange { min, max } => numeric::generate_float_range(rng, *min, *max),
        GeneratorConfig::TimestampRange { start, end } => {
            timestamp::generate_timestamp_range(rng, start, end)
        }
        GeneratorConfig::TimestampNow => timestamp::generate_timestamp_now(),
        GeneratorConfig::WeightedBool { true_weight } => Value::Bool(rng.random_bool(*true_weight)),
        GeneratorConfig::OneOf { values } => values
            .choose(rng)
            .map(static_value::yaml_to_value)
            .unwrap_or(Value::Null),
        GeneratorConfig::SampleArray {
            pool,
            min_length,
            max_length,
        } => array::generate_sample_array(rng, pool, *min_length, *max_length),
        GeneratorConfig::Static { value } => static_value::yaml_to_value(value),
        GeneratorConfig::Null => Value::Null,
    }
}

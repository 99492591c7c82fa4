//! Array generator sampling from a value pool.

use crate::generators::static_value;
use datagen_core::values::Value;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Generate an array by sampling `min_length..=max_length` values from the
/// pool, with replacement.
pub fn generate_sample_array<R: Rng>(
    rng: &mut R,
    pool: &[serde_yaml::Value],
    min_length: usize,
    max_length: usize,
) -> Value {
    if pool.is_empty() || max_length == 0 {
        return Value::Array(Vec::new());
    }

    let length = rng.random_range(min_length.min(max_length)..=max_length);
    let items = (0..length)
        .filter_map(|_| pool.choose(rng))
        .map(static_value::yaml_to_value)
        .collect();

    Value::Array(items)
}

//! Main data generator for producing randomized records.

use crate::generators::{generate_value, timestamp};
use datagen_core::schema::{FieldSchema, FieldType, GeneratorConfig, Schema};
use datagen_core::values::{Record, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Error type for generator operations.
///
/// Every generator configuration is validated when the generator is built,
/// so a misconfigured schema is rejected before any broker resource is
/// acquired.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Integer range with min above max
    #[error("Field '{field}': min {min} is greater than max {max}")]
    InvalidIntRange {
        field: String,
        min: i64,
        max: i64,
    },

    /// Float range with min above max
    #[error("Field '{field}': min {min} is greater than max {max}")]
    InvalidFloatRange {
        field: String,
        min: f64,
        max: f64,
    },

    /// Float range with a NaN or infinite bound
    #[error("Field '{field}': range bounds must be finite")]
    NonFiniteRange { field: String },

    /// Timestamp bound that is neither RFC 3339 nor a plain date
    #[error("Field '{field}': cannot parse timestamp bound '{value}'")]
    InvalidTimestampBound { field: String, value: String },

    /// Timestamp range with start after end
    #[error("Field '{field}': start '{start}' is after end '{end}'")]
    InvertedTimestampRange {
        field: String,
        start: String,
        end: String,
    },

    /// Boolean weight outside the unit interval
    #[error("Field '{field}': true_weight {weight} is outside 0.0..=1.0")]
    InvalidWeight { field: String, weight: f64 },

    /// `one_of` or `sample_array` with nothing to pick from
    #[error("Field '{field}': value pool is empty")]
    EmptyPool { field: String },

    /// `sample_array` with min_length above max_length
    #[error("Field '{field}': min_length {min} is greater than max_length {max}")]
    InvalidLengthRange {
        field: String,
        min: usize,
        max: usize,
    },

    /// YAML mapping used where only scalar or sequence values are supported
    #[error("Field '{field}': mapping values are not supported")]
    UnsupportedValue { field: String },

    /// Generator output type does not match the declared field type
    #[error("Field '{field}': generator produces {produced:?} but schema declares {declared:?}")]
    TypeMismatch {
        field: String,
        declared: FieldType,
        produced: FieldType,
    },
}

/// Source of records for the publish loop.
///
/// The loop driver is generic over this trait; tests substitute scripted
/// sources for the seeded generator.
pub trait RecordSource {
    /// Produce the next record.
    fn generate(&mut self) -> Result<Record, GeneratorError>;
}

/// Data generator that produces deterministic randomized records.
///
/// The generator uses a seeded random number generator, so the same schema
/// and seed yield the same record sequence across runs.
pub struct DataGenerator {
    schema: Schema,
    rng: StdRng,
    index: u64,
}

impl DataGenerator {
    /// Create a new data generator with the given schema and seed.
    ///
    /// Every field's generator configuration is validated here; a
    /// misconfigured range, weight, or pool is reported before the first
    /// record is generated.
    pub fn new(schema: Schema, seed: u64) -> Result<Self, GeneratorError> {
        for field in &schema.fields {
            validate_field(field)?;
        }
        Ok(Self {
            schema,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        })
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn next_record(&mut self) -> Record {
        let index = self.index;
        let rng = &mut self.rng;
        let fields: HashMap<String, Value> = self
            .schema
            .fields
            .iter()
            .map(|field| (field.name.clone(), generate_value(&field.generator, rng, index)))
            .collect();

        self.index += 1;

        Record::new(index, fields)
    }
}

impl RecordSource for DataGenerator {
    fn generate(&mut self) -> Result<Record, GeneratorError> {
        Ok(self.next_record())
    }
}

fn validate_field(field: &FieldSchema) -> Result<(), GeneratorError> {
    if let Some(produced) = field.generator.output_type() {
        if produced != field.field_type {
            return Err(GeneratorError::TypeMismatch {
                field: field.name.clone(),
                declared: field.field_type,
                produced,
            });
        }
    }

    match &field.generator {
        GeneratorConfig::IntRange { min, max } if min > max => {
            Err(GeneratorError::InvalidIntRange {
                field: field.name.clone(),
                min: *min,
                max: *max,
            })
        }
        GeneratorConfig::FloatRange { min, max } => {
            if !min.is_finite() || !max.is_finite() {
                Err(GeneratorError::NonFiniteRange {
                    field: field.name.clone(),
                })
            } else if min > max {
                Err(GeneratorError::InvalidFloatRange {
                    field: field.name.clone(),
                    min: *min,
                    max: *max,
                })
            } else {
                Ok(())
            }
        }
        GeneratorConfig::TimestampRange { start, end } => {
            let start_ts = timestamp::parse_timestamp(start).ok_or_else(|| {
                GeneratorError::InvalidTimestampBound {
                    field: field.name.clone(),
                    value: start.clone(),
                }
            })?;
            let end_ts = timestamp::parse_timestamp(end).ok_or_else(|| {
                GeneratorError::InvalidTimestampBound {
                    field: field.name.clone(),
                    value: end.clone(),
                }
            })?;
            if start_ts > end_ts {
                Err(GeneratorError::InvertedTimestampRange {
                    field: field.name.clone(),
                    start: start.clone(),
                    end: end.clone(),
                })
            } else {
                Ok(())
            }
        }
        GeneratorConfig::WeightedBool { true_weight } => {
            if (0.0..=1.0).contains(true_weight) {
                Ok(())
            } else {
                Err(GeneratorError::InvalidWeight {
                    field: field.name.clone(),
                    weight: *true_weight,
                })
            }
        }
        GeneratorConfig::OneOf { values } => {
            if values.is_empty() {
                return Err(GeneratorError::EmptyPool {
                    field: field.name.clone(),
                });
            }
            validate_yaml_values(&field.name, values)
        }
        GeneratorConfig::SampleArray {
            pool,
            min_length,
            max_length,
        } => {
            if pool.is_empty() {
                return Err(GeneratorError::EmptyPool {
                    field: field.name.clone(),
                });
            }
            if min_length > max_length {
                return Err(GeneratorError::InvalidLengthRange {
                    field: field.name.clone(),
                    min: *min_length,
                    max: *max_length,
                });
            }
            validate_yaml_values(&field.name, pool)
        }
        GeneratorConfig::Static { value } => {
            validate_yaml_values(&field.name, std::slice::from_ref(value))
        }
        _ => Ok(()),
    }
}

// Mappings have no Value counterpart; reject them up front.
fn validate_yaml_values(field: &str, values: &[serde_yaml::Value]) -> Result<(), GeneratorError> {
    for value in values {
        match value {
            serde_yaml::Value::Mapping(_) => {
                return Err(GeneratorError::UnsupportedValue {
                    field: field.to_string(),
                })
            }
            serde_yaml::Value::Sequence(seq) => validate_yaml_values(field, seq)?,
            serde_yaml::Value::Tagged(tagged) => {
                validate_yaml_values(field, std::slice::from_ref(&tagged.value))?
            }
            _ => {}
        }
    }
    Ok(())
}

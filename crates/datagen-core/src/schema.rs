//! Schema definitions for record generation.
//!
//! A schema is loaded from a YAML file and declares the fields of the
//! records this tool produces, together with the generator configuration
//! for each field. Topic and key templates are validated against the field
//! names declared here before anything is published.
//!
//! # YAML Format
//!
//! ```yaml
//! version: 1
//! seed: 42
//!
//! fields:
//!   - name: region
//!     type: text
//!     generator:
//!       type: one_of
//!       values: ["west", "east"]
//!
//!   - name: temp
//!     type: int
//!     generator:
//!       type: int_range
//!       min: -20
//!       max: 45
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two fields share a name
    #[error("Duplicate field in schema: '{0}'")]
    DuplicateField(String),
}

/// Declared type of a schema field.
///
/// The declared type documents the record shape and is checked against the
/// field's generator configuration when the generator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Boolean value
    Bool,

    /// 64-bit signed integer
    Int,

    /// 64-bit IEEE 754 floating point
    Float,

    /// Unlimited text
    Text,

    /// UUID value
    Uuid,

    /// Date/time with timezone
    Timestamp,

    /// Array of values
    Array,
}

/// Generator configuration for a field.
///
/// This enum defines the different types of value generators available
/// for producing record data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate UUIDs (v4)
    UuidV4,

    /// Generate sequential integers
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Generate strings using a pattern with placeholders
    Pattern {
        /// Pattern string (supports {index}, {uuid}, {rand:N})
        pattern: String,
    },

    /// Generate random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random floats in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Generate timestamps in a range
    TimestampRange {
        /// Start timestamp (ISO 8601)
        start: String,
        /// End timestamp (ISO 8601)
        end: String,
    },

    /// Generate the current timestamp at generation time
    ///
    /// Note: This is NOT deterministic - each generation produces a
    /// different value.
    TimestampNow,

    /// Generate weighted boolean values
    WeightedBool {
        /// Weight for true value (0.0 to 1.0)
        true_weight: f64,
    },

    /// Generate random selection from a pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// Generate arrays by sampling from a pool
    SampleArray {
        /// Pool of values to sample from
        pool: Vec<serde_yaml::Value>,
        /// Minimum array length
        #[serde(default)]
        min_length: usize,
        /// Maximum array length
        max_length: usize,
    },

    /// Generate a static value
    Static {
        /// The static value to use
        value: serde_yaml::Value,
    },

    /// Generate null values
    Null,
}

impl GeneratorConfig {
    /// The field type this generator produces, when it is fixed.
    ///
    /// Returns `None` for generators whose output type depends on the
    /// configured values (`one_of`, `static`) or is always null.
    pub fn output_type(&self) -> Option<FieldType> {
        match self {
            Self::UuidV4 => Some(FieldType::Uuid),
            Self::Sequential { .. } | Self::IntRange { .. } => Some(FieldType::Int),
            Self::Pattern { .. } => Some(FieldType::Text),
            Self::FloatRange { .. } => Some(FieldType::Float),
            Self::TimestampRange { .. } | Self::TimestampNow => Some(FieldType::Timestamp),
            Self::WeightedBool { .. } => Some(FieldType::Bool),
            Self::SampleArray { .. } => Some(FieldType::Array),
            Self::OneOf { .. } | Self::Static { .. } | Self::Null => None,
        }
    }
}

/// A single field: name, declared type, and generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name
    pub name: String,

    /// Declared field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Generator configuration for this field
    pub generator: GeneratorConfig,
}

fn default_version() -> u32 {
    1
}

/// Record schema loaded from a YAML file.
///
/// The schema is the source of truth for both record generation and
/// template validation: every `{field}` placeholder in the topic and key
/// templates must name a field declared here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed baked into the schema file; takes precedence over the CLI seed
    #[serde(default)]
    pub seed: Option<u64>,

    /// Field definitions, in declaration order
    pub fields: Vec<FieldSchema>,
}

impl Schema {
    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_yaml::from_str(yaml)?;
        let mut seen = HashSet::new();
        for field in &schema.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(schema)
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

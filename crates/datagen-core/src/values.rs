//! Value and record representations.
//!
//! A [`Record`] is one generator output: a row index plus a map from field
//! name to [`Value`]. Records live for a single publish iteration; the
//! template resolver reads field values out of them and the payload encoder
//! serializes them as JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A generated field value.
///
/// The `Display` implementation is the canonical string form used when a
/// value is substituted into a topic segment: text renders without quotes,
/// timestamps render as RFC 3339 with a `Z` suffix, and null renders as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// UUID value
    Uuid(Uuid),

    /// Date/time with timezone
    Timestamp(DateTime<Utc>),

    /// String value
    Text(String),

    /// Array of values
    Array(Vec<Value>),

    /// Null value
    Null,
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Timestamp(ts) => {
                write!(f, "{}", ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Text(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

/// One generated record.
///
/// Scoped to a single loop iteration: generated, resolved against the
/// templates, serialized, published, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Record index (increments per generation, for reproducibility)
    pub index: u64,

    /// Field values (field name -> value)
    pub fields: HashMap<String, Value>,
}

impl Record {
    /// Create a new record.
    pub fn new(index: u64, fields: HashMap<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Create a new record with a builder pattern.
    pub fn builder(index: u64) -> RecordBuilder {
        RecordBuilder {
            index,
            fields: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Builder for [`Record`].
pub struct RecordBuilder {
    index: u64,
    fields: HashMap<String, Value>,
}

impl RecordBuilder {
    /// Add a field to the record.
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Build the record.
    pub fn build(self) -> Record {
        Record {
            index: self.index,
            fields: self.fields,
        }
    }
}

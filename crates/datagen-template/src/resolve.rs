//! Per-iteration resolution of templates against a concrete record.
//!
//! Resolution never caches: field values differ per record, so every
//! iteration re-resolves from scratch.

use crate::error::TemplateError;
use crate::placeholder::{parse_segment, Segment};
use datagen_core::{Record, Value};

/// The literal topic and typed routing key for one publish.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    /// Topic with all placeholders substituted
    pub topic: String,

    /// Routing key; a literal key spec resolves to `Value::Text`
    pub key: Value,
}

/// Resolve a topic template against a record.
///
/// Placeholder segments become the display form of the field value, literal
/// segments pass through unchanged, and the segment count is preserved.
pub fn resolve_topic(template: &str, record: &Record) -> Result<String, TemplateError> {
    let segments: Vec<String> = template
        .split('/')
        .map(|segment| match parse_segment(segment) {
            Segment::Placeholder(name) => record
                .get_field(name)
                .map(Value::to_string)
                .ok_or_else(|| TemplateError::MissingField {
                    field: name.to_string(),
                }),
            Segment::Literal(text) => Ok(text.to_string()),
        })
        .collect::<Result<_, _>>()?;

    Ok(segments.join("/"))
}

/// Resolve a key specifier against a record.
///
/// A placeholder resolves to the field's typed value; the broker layer
/// decides how to turn it into routing bytes. A literal resolves to the
/// same text value on every iteration.
pub fn resolve_key(key_spec: &str, record: &Record) -> Result<Value, TemplateError> {
    match parse_segment(key_spec) {
        Segment::Placeholder(name) => record.get_field(name).cloned().ok_or_else(|| {
            TemplateError::MissingField {
                field: name.to_string(),
            }
        }),
        Segment::Literal(text) => Ok(Value::Text(text.to_string())),
    }
}

/// Resolve the key and the topic for one record.
///
/// The key resolves first, so when both reference missing fields the error
/// names the key's field.
pub fn resolve_address(
    topic_template: &str,
    key_spec: &str,
    record: &Record,
) -> Result<ResolvedAddress, TemplateError> {
    let key = resolve_key(key_spec, record)?;
    let topic = resolve_topic(topic_template, record)?;
    Ok(ResolvedAddress { topic, key })
}

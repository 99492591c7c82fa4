//! Pre-flight validation of topic and key templates against a schema.
//!
//! Runs once at startup, before the generator is built and before any
//! broker connection is attempted. A template that references a field the
//! schema does not declare must never cost a connection attempt.

use crate::error::{FieldRef, TemplateError};
use crate::placeholder::{parse_segment, Segment};
use datagen_core::Schema;

/// Validate every placeholder in a topic template against the schema.
///
/// The whole template is scanned before reporting, so the error names every
/// offending placeholder, not just the first.
pub fn validate_topic_template(template: &str, schema: &Schema) -> Result<(), TemplateError> {
    let unknown: Vec<FieldRef> = template
        .split('/')
        .enumerate()
        .filter_map(|(position, segment)| match parse_segment(segment) {
            Segment::Placeholder(name) if schema.get_field(name).is_none() => {
                Some(FieldRef::new(name, position))
            }
            _ => None,
        })
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(TemplateError::UnknownFields(unknown))
    }
}

/// Validate a key specifier against the schema.
///
/// A placeholder key must name a schema field; a literal key is always
/// valid and is used verbatim on every iteration.
pub fn validate_key_spec(key_spec: &str, schema: &Schema) -> Result<(), TemplateError> {
    match parse_segment(key_spec) {
        Segment::Placeholder(name) if schema.get_field(name).is_none() => Err(
            TemplateError::UnknownFields(vec![FieldRef::new(name, 0)]),
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor_schema() -> Schema {
        Schema::from_yaml(
            r#"
fields:
  - name: region
    type: text
    generator:
      type: one_of
      values: ["west", "east"]
  - name: temp
    type: int
    generator:
      type: int_range
      min: -20
      max: 45
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_known_fields_pass() {
        let schema = sensor_schema();
        assert!(validate_topic_template("sensors/{region}/reading", &schema).is_ok());
        assert!(validate_topic_template("{region}/{temp}", &schema).is_ok());
    }

    #[test]
    fn test_literal_only_template_passes() {
        let schema = sensor_schema();
        assert!(validate_topic_template("sensors/all/reading", &schema).is_ok());
        assert!(validate_topic_template("", &schema).is_ok());
    }

    #[test]
    fn test_unknown_field_fails_with_position() {
        let schema = sensor_schema();
        let err = validate_topic_template("sensors/{zone}/reading", &schema).unwrap_err();

        match err {
            TemplateError::UnknownFields(refs) => {
                assert_eq!(refs, vec![FieldRef::new("zone", 1)]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_all_unknown_fields_reported() {
        let schema = sensor_schema();
        let err = validate_topic_template("{zone}/{region}/{rack}", &schema).unwrap_err();

        match err {
            TemplateError::UnknownFields(refs) => {
                assert_eq!(
                    refs,
                    vec![FieldRef::new("zone", 0), FieldRef::new("rack", 2)]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_placeholder_is_valid_literal() {
        // `{zone` never closes, so it is a literal segment and does not
        // reference any field
        let schema = sensor_schema();
        assert!(validate_topic_template("sensors/{zone/reading", &schema).is_ok());
        assert!(validate_topic_template("sensors/x{zone}/reading", &schema).is_ok());
    }

    #[test]
    fn test_key_spec_placeholder_checked() {
        let schema = sensor_schema();
        assert!(validate_key_spec("{temp}", &schema).is_ok());

        let err = validate_key_spec("{device}", &schema).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnknownFields(refs) if refs == vec![FieldRef::new("device", 0)]
        ));
    }

    #[test]
    fn test_key_spec_literal_always_valid() {
        let schema = sensor_schema();
        assert!(validate_key_spec("fixed-key", &schema).is_ok());
        assert!(validate_key_spec("", &schema).is_ok());
        assert!(validate_key_spec("{not a field}", &schema).is_ok());
    }
}

//! Error types for template validation and resolution.

use std::fmt;

/// A placeholder that references a field the schema does not declare,
/// together with where it sits in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    /// Field name inside the placeholder
    pub name: String,

    /// Zero-based segment index within the template
    pub segment: usize,
}

impl FieldRef {
    pub fn new(name: impl Into<String>, segment: usize) -> Self {
        Self {
            name: name.into(),
            segment,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' (segment {})", self.name, self.segment)
    }
}

/// Error type for template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// One or more placeholders reference fields absent from the schema.
    /// Validation scans the whole template, so every offending placeholder
    /// is listed.
    #[error("Template references unknown fields: {}", format_refs(.0))]
    UnknownFields(Vec<FieldRef>),

    /// A validated field disappeared from the record at resolution time
    #[error("Record is missing field '{field}' required by the template")]
    MissingField { field: String },
}

fn format_refs(refs: &[FieldRef]) -> String {
    refs.iter()
        .map(FieldRef::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

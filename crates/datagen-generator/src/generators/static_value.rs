//! Static value generator and YAML-to-value conversion.

use datagen_core::values::Value;

/// Convert a YAML value from the schema into a record value.
///
/// Mappings have no record counterpart; schema validation rejects them
/// before generation starts, so they map to `Null` here only for totality.
pub fn yaml_to_value(yaml: &serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_yaml::Value::String(s) => Value::Text(s.clone()),
        serde_yaml::Value::Sequence(seq) => Value::Array(seq.iter().map(yaml_to_value).collect()),
        serde_yaml::Value::Mapping(_) => Value::Null,
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}

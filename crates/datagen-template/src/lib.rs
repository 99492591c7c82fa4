//! Topic and key templates with `{field}` placeholders.
//!
//! Templates address each published message: the topic template is a
//! `/`-separated path whose segments may reference record fields, and the
//! key specifier is a single segment that is either a literal or one field
//! reference.
//!
//! Validation runs once at startup against the schema; resolution runs once
//! per published record:
//!
//! ```
//! use datagen_core::{Record, Schema, Value};
//! use datagen_template::{resolve_address, validate_topic_template};
//!
//! let schema = Schema::from_yaml(
//!     "fields:\n  - name: region\n    type: text\n    generator:\n      type: one_of\n      values: [west]\n",
//! )
//! .unwrap();
//! validate_topic_template("sensors/{region}/reading", &schema).unwrap();
//!
//! let record = Record::builder(0)
//!     .field("region", Value::Text("west".into()))
//!     .build();
//! let address = resolve_address("sensors/{region}/reading", "{region}", &record).unwrap();
//! assert_eq!(address.topic, "sensors/west/reading");
//! ```

pub mod error;
pub mod placeholder;
pub mod resolve;
pub mod validate;

pub use error::{FieldRef, TemplateError};
pub use placeholder::{parse_segment, Segment};
pub use resolve::{resolve_address, resolve_key, resolve_topic, ResolvedAddress};
pub use validate::{validate_key_spec, validate_topic_template};

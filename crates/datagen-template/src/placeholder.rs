//! Placeholder grammar.
//!
//! A segment is a placeholder iff it is exactly `{name}` where `name` is
//! one or more word characters (ASCII letters, digits, underscore).
//! Anything else, including partial matches like `x{f}` or `{a}{b}`, is a
//! literal. The strictness is deliberate: a malformed placeholder must
//! surface as an unexpected literal topic, not as a silently truncated
//! field reference.

/// A classified template segment borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, used verbatim
    Literal(&'a str),

    /// A `{name}` placeholder, carrying the inner field name
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    /// The field name if this segment is a placeholder.
    pub fn field_name(&self) -> Option<&'a str> {
        match self {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// Classify one template segment.
pub fn parse_segment(segment: &str) -> Segment<'_> {
    let inner = segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'));

    match inner {
        Some(name) if is_word(name) => Segment::Placeholder(name),
        _ => Segment::Literal(segment),
    }
}

fn is_word(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_placeholder() {
        assert_eq!(parse_segment("{region}"), Segment::Placeholder("region"));
        assert_eq!(parse_segment("{temp_c}"), Segment::Placeholder("temp_c"));
        assert_eq!(parse_segment("{f1}"), Segment::Placeholder("f1"));
        assert_eq!(parse_segment("{_}"), Segment::Placeholder("_"));
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(parse_segment("sensors"), Segment::Literal("sensors"));
        assert_eq!(parse_segment(""), Segment::Literal(""));
    }

    #[test]
    fn test_partial_matches_are_literals() {
        assert_eq!(parse_segment("x{f}"), Segment::Literal("x{f}"));
        assert_eq!(parse_segment("{f}x"), Segment::Literal("{f}x"));
        assert_eq!(parse_segment("{a}{b}"), Segment::Literal("{a}{b}"));
    }

    #[test]
    fn test_malformed_placeholders_are_literals() {
        assert_eq!(parse_segment("{}"), Segment::Literal("{}"));
        assert_eq!(parse_segment("{a-b}"), Segment::Literal("{a-b}"));
        assert_eq!(parse_segment("{a b}"), Segment::Literal("{a b}"));
        assert_eq!(parse_segment("{"), Segment::Literal("{"));
        assert_eq!(parse_segment("}"), Segment::Literal("}"));
        assert_eq!(parse_segment("{région}"), Segment::Literal("{région}"));
    }

    #[test]
    fn test_field_name_accessor() {
        assert_eq!(parse_segment("{temp}").field_name(), Some("temp"));
        assert_eq!(parse_segment("reading").field_name(), None);
    }
}

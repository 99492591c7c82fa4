//! Pattern-based text generator.
//!
//! Patterns are literal text with three substitutions:
//! - `{index}` - the zero-based record index
//! - `{uuid}` - a random UUID drawn from the generator's seeded rng
//! - `{rand:N}` - a random N-digit number (no leading zero)

use crate::generators::uuid::random_uuid;
use datagen_core::values::Value;
use rand::Rng;

/// Generate a text value by expanding substitutions in the pattern.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> Value {
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &random_uuid(rng).to_string(), 1);
    }

    while let Some(start) = result.find("{rand:") {
        let Some(close) = result[start..].find('}') else {
            break;
        };
        let Ok(digits) = result[start + 6..start + close].parse::<usize>() else {
            break;
        };
        let number = random_digits(rng, digits);
        result.replace_range(start..start + close + 1, &number);
    }

    Value::Text(result)
}

fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }
    let mut number = String::with_capacity(digits);
    number.push(char::from(b'0' + rng.random_range(1..=9u8)));
    for _ in 1..digits {
        number.push(char::from(b'0' + rng.random_range(0..=9u8)));
    }
    number
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_index_substitution() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_pattern("sensor_{index}", &mut rng, 17),
            Value::Text("sensor_17".to_string())
        );
    }

    #[test]
    fn test_uuid_substitution() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("id-{uuid}", &mut rng, 0);
        let text = value.as_str().unwrap();

        assert!(text.starts_with("id-"));
        assert_eq!(text.len(), 3 + 36);
    }

    #[test]
    fn test_rand_substitution() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("order-{rand:6}", &mut rng, 0);
        let text = value.as_str().unwrap();

        let digits = text.strip_prefix("order-").unwrap();
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert!(!digits.starts_with('0'));
    }

    #[test]
    fn test_multiple_substitutions() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("{index}-{rand:3}-{rand:3}", &mut rng, 5);
        let text = value.as_str().unwrap();

        let parts: Vec<&str> = text.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "5");
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 3);
    }

    #[test]
    fn test_literal_pattern_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_pattern("plain text", &mut rng, 0),
            Value::Text("plain text".to_string())
        );
    }

    #[test]
    fn test_malformed_rand_left_alone() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_pattern("x-{rand:abc}", &mut rng, 0),
            Value::Text("x-{rand:abc}".to_string())
        );
    }

    #[test]
    fn test_deterministic_across_seeded_rngs() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_pattern("{uuid}-{rand:4}", &mut rng1, 0),
            generate_pattern("{uuid}-{rand:4}", &mut rng2, 0)
        );
    }
}

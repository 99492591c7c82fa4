//! Numeric range generators.

use datagen_core::values::Value;
use rand::Rng;

/// Generate a random integer in the inclusive range `[min, max]`.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.random_range(min..=max))
}

/// Generate a random float in the inclusive range `[min, max]`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Value {
    Value::Float(rng.random_range(min..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, -20, 45);
            let n = value.as_i64().unwrap();
            assert!((-20..=45).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn test_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_int_range(&mut rng, 7, 7), Value::Int(7));
    }

    #[test]
    fn test_float_range_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_float_range(&mut rng, 0.0, 1.0);
            let f = value.as_f64().unwrap();
            assert!((0.0..=1.0).contains(&f), "{f} out of range");
        }
    }
}

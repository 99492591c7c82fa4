//! Timestamp generators.

use chrono::{DateTime, NaiveDate, Utc};
use datagen_core::values::Value;
use rand::Rng;

/// Parse a timestamp bound from the schema.
///
/// Accepts full RFC 3339 timestamps and plain `YYYY-MM-DD` dates, which
/// resolve to midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Generate a random timestamp between the two bounds (second resolution).
///
/// Bounds are validated when the generator is constructed; the fallbacks
/// here only keep generation total.
pub fn generate_timestamp_range<R: Rng>(rng: &mut R, start: &str, end: &str) -> Value {
    let start_ts = parse_timestamp(start).unwrap_or_else(Utc::now);
    let end_ts = parse_timestamp(end).unwrap_or(start_ts);

    let (lo, hi) = (start_ts.timestamp(), end_ts.timestamp().max(start_ts.timestamp()));
    let random_ts = rng.random_range(lo..=hi);

    Value::Timestamp(DateTime::from_timestamp(random_ts, 0).unwrap_or(start_ts))
}

/// Generate the current timestamp.
pub fn generate_timestamp_now() -> Value {
    Value::Timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2024-06-01T12:30:00Z").unwrap();
        assert_eq!(ts.timestamp(), 1717245000);
    }

    #[test]
    fn test_parse_plain_date() {
        let ts = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(ts, parse_timestamp("2024-06-01T00:00:00Z").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("tomorrow").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }

    #[test]
    fn test_range_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = parse_timestamp("2020-01-01").unwrap();
        let end = parse_timestamp("2024-12-31").unwrap();

        for _ in 0..50 {
            let value = generate_timestamp_range(&mut rng, "2020-01-01", "2024-12-31");
            let ts = *value.as_timestamp().unwrap();
            assert!(ts >= start && ts <= end);
        }
    }

    #[test]
    fn test_range_single_instant() {
        let mut rng = StdRng::seed_from_u64(42);
        let value =
            generate_timestamp_range(&mut rng, "2024-06-01T12:00:00Z", "2024-06-01T12:00:00Z");
        assert_eq!(
            *value.as_timestamp().unwrap(),
            parse_timestamp("2024-06-01T12:00:00Z").unwrap()
        );
    }
}

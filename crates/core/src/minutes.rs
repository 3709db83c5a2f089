//! Minutes-played parsing.
//!
//! Box-score exports write minutes either as a decimal number (`34.5`) or as a
//! clock string (`34:30`). Both normalize to fractional minutes here, once, at
//! load time.

/// Parses a minutes-played cell into fractional minutes.
///
/// Contract:
/// - surrounding whitespace is ignored
/// - a finite, non-negative number is returned unchanged
/// - `"MM:SS"` returns `MM + SS / 60` when both parts are non-negative integers
/// - anything else (empty, negative, NaN, extra colons, text) returns `0.0`
///
/// The result is always finite and never negative.
#[must_use]
pub fn parse_minutes(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some((mins, secs)) = trimmed.split_once(':') {
        return match (mins.trim().parse::<u32>(), secs.trim().parse::<u32>()) {
            (Ok(m), Ok(s)) => f64::from(m) + f64::from(s) / 60.0,
            _ => 0.0,
        };
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_minutes("36"), 36.0);
        assert_eq!(parse_minutes(" 34.5 "), 34.5);
        assert_eq!(parse_minutes("0"), 0.0);
    }

    #[test]
    fn test_parse_clock_format() {
        assert_eq!(parse_minutes("36:00"), 36.0);
        assert_eq!(parse_minutes("34:30"), 34.5);
        assert_eq!(parse_minutes("0:45"), 0.75);
    }

    #[test]
    fn test_parse_invalid_returns_zero() {
        assert_eq!(parse_minutes(""), 0.0);
        assert_eq!(parse_minutes("DNP"), 0.0);
        assert_eq!(parse_minutes("-5"), 0.0);
        assert_eq!(parse_minutes("NaN"), 0.0);
        assert_eq!(parse_minutes("inf"), 0.0);
        assert_eq!(parse_minutes("12:3x"), 0.0);
        assert_eq!(parse_minutes("1:2:3"), 0.0);
        assert_eq!(parse_minutes("-1:30"), 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_negative_or_nan(raw in ".*") {
            let minutes = parse_minutes(&raw);
            prop_assert!(minutes.is_finite());
            prop_assert!(minutes >= 0.0);
        }

        #[test]
        fn prop_clock_format_matches_components(m in 0u32..60, s in 0u32..60) {
            let minutes = parse_minutes(&format!("{m}:{s:02}"));
            let expected = f64::from(m) + f64::from(s) / 60.0;
            prop_assert!((minutes - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_plain_number_is_identity(value in 0.0f64..60.0) {
            prop_assert_eq!(parse_minutes(&value.to_string()), value);
        }
    }
}

// src/parsers.rs
//! Value parsers for command-line flags.

use std::{fmt::Display, str::FromStr};

use f1_results_domain::Range;

/// Parses `MIN..MAX`, `MIN..`, `..MAX` or `..` into an inclusive range.
///
/// A bare value `N` is shorthand for `N..N`.
pub fn parse_range<T>(s: &str) -> Result<Range<T>, String>
where
    T: FromStr + PartialOrd + Copy,
    T::Err: Display,
{
    let s = s.trim();
    let Some((lo, hi)) = s.split_once("..") else {
        let value = parse_bound::<T>(s)?;
        return Ok(Range::between(value, value));
    };
    let min = optional_bound::<T>(lo)?;
    let max = optional_bound::<T>(hi.strip_prefix('=').unwrap_or(hi))?;
    let range = Range::new(min, max);
    if range.is_inverted() {
        return Err(format!("Range '{s}' has its minimum above its maximum"));
    }
    Ok(range)
}

pub fn parse_points_range(s: &str) -> Result<Range<f64>, String> {
    let range = parse_range::<f64>(s)?;
    let finite_non_negative = |v: Option<f64>| v.is_none_or(|v| v.is_finite() && v >= 0.0);
    if !finite_non_negative(range.min) || !finite_non_negative(range.max) {
        return Err(format!("Points range '{s}' must use finite, non-negative bounds"));
    }
    Ok(range)
}

pub fn parse_position_range(s: &str) -> Result<Range<u32>, String> {
    let range = parse_range::<u32>(s)?;
    if range.min == Some(0) || range.max == Some(0) {
        return Err(format!("Positions start at 1, got '{s}'"));
    }
    Ok(range)
}

pub fn parse_positive_u32(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err("Value must be greater than zero".to_string()),
        Ok(v) => Ok(v),
        Err(e) => Err(format!("Invalid number '{s}': {e}")),
    }
}

pub fn parse_positive_secs(s: &str) -> Result<u64, String> {
    parse_positive_u32(s).map(u64::from)
}

fn optional_bound<T>(s: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let s = s.trim();
    if s.is_empty() { Ok(None) } else { parse_bound(s).map(Some) }
}

fn parse_bound<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    s.trim().parse::<T>().map_err(|e| format!("Invalid bound '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_and_open_ranges() {
        assert_eq!(parse_position_range("1..3").unwrap(), Range::between(1, 3));
        assert_eq!(parse_position_range("1..=3").unwrap(), Range::between(1, 3));
        assert_eq!(parse_position_range("..10").unwrap(), Range::new(None, Some(10)));
        assert_eq!(parse_points_range("12.5..").unwrap(), Range::new(Some(12.5), None));
        assert_eq!(parse_points_range("..").unwrap(), Range::unbounded());
    }

    #[test]
    fn single_value_is_degenerate_range() {
        assert_eq!(parse_position_range("1").unwrap(), Range::between(1, 1));
    }

    #[test]
    fn rejects_inverted_and_invalid_ranges() {
        assert!(parse_position_range("5..2").is_err());
        assert!(parse_position_range("0..3").is_err());
        assert!(parse_position_range("a..3").is_err());
        assert!(parse_points_range("-1..10").is_err());
        assert!(parse_points_range("..inf").is_err());
    }

    #[test]
    fn positive_numbers() {
        assert_eq!(parse_positive_u32("50").unwrap(), 50);
        assert!(parse_positive_u32("0").is_err());
        assert!(parse_positive_secs("x").is_err());
    }
}

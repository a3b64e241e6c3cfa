//! Coercion of raw API fields into typed row values.
//!
//! Position and points never fail: bad input degrades to "absent" and `0.0`
//! respectively, with a [`ParseWarning`] describing what was replaced.

use chrono::NaiveDate;
use f1_results_shared_kernel::{DataShapeError, ParseWarning};

/// Date format used by the results API (`2023-03-05`).
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a finishing position.
///
/// Only values made entirely of ASCII digits count as positions. A missing
/// value means the driver did not finish and is not a warning.
pub fn try_parse_position(raw: Option<&str>) -> Result<Option<u32>, ParseWarning> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseWarning::NonNumericPosition { raw: raw.to_string() });
    }

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(ParseWarning::NonNumericPosition { raw: raw.to_string() }),
        Ok(position) => Ok(Some(position)),
    }
}

#[inline]
pub fn parse_position(raw: Option<&str>) -> Option<u32> {
    try_parse_position(raw).unwrap_or(None)
}

/// Parses awarded points. Any finite value is kept, including deductions.
pub fn try_parse_points(raw: Option<&str>) -> Result<f64, ParseWarning> {
    let Some(raw) = raw else {
        return Err(ParseWarning::MissingPoints);
    };

    match raw.trim().parse::<f64>() {
        Ok(points) if points.is_finite() => Ok(points),
        _ => Err(ParseWarning::InvalidPoints { raw: raw.to_string() }),
    }
}

#[inline]
pub fn parse_points(raw: Option<&str>) -> f64 {
    try_parse_points(raw).unwrap_or(0.0)
}

/// Parses a race date; unlike points, a date has no sensible default.
pub fn parse_race_date(raw: &str, path: &str) -> Result<NaiveDate, DataShapeError> {
    NaiveDate::parse_from_str(raw.trim(), API_DATE_FORMAT)
        .map_err(|_| DataShapeError::InvalidValue { path: path.to_string(), value: raw.to_string() })
}

/// Joins given and family name with a single space.
pub fn full_name(given: &str, family: &str) -> String {
    let mut name = String::with_capacity(given.len() + family.len() + 1);
    name.push_str(given);
    name.push(' ');
    name.push_str(family);
    name
}

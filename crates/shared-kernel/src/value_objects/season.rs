// crates/shared-kernel/src/value_objects/season.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// First championship season published by the results API.
pub const FIRST_SEASON: u16 = 1950;

/// Season used when no other choice is available.
pub const DEFAULT_SEASON: Season = Season(2023);

/// A championship year, e.g. `2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "u16", into = "u16")]
pub struct Season(u16);

impl Season {
    pub fn new(year: u16) -> Result<Self, DomainError> {
        if year < FIRST_SEASON {
            return Err(DomainError::InvalidSeason {
                value: year.to_string(),
                reason: format!("seasons start at {FIRST_SEASON}"),
            });
        }
        Ok(Self(year))
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.0
    }

    /// Endpoint path listing every race result of this season.
    pub fn results_endpoint(self) -> String {
        format!("{}/results", self.0)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let year: u16 = trimmed.parse().map_err(|_| DomainError::InvalidSeason {
            value: trimmed.to_string(),
            reason: "expected a four digit year".to_string(),
        })?;
        Self::new(year)
    }
}

impl TryFrom<u16> for Season {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Season> for u16 {
    fn from(value: Season) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_with_whitespace() {
        let season: Season = " 2023 ".parse().unwrap();
        assert_eq!(season.year(), 2023);
        assert_eq!(season.to_string(), "2023");
    }

    #[test]
    fn rejects_pre_championship_years() {
        assert!(Season::new(1949).is_err());
        assert!("abcd".parse::<Season>().is_err());
    }

    #[test]
    fn builds_results_endpoint() {
        assert_eq!(Season::new(2021).unwrap().results_endpoint(), "2021/results");
    }
}

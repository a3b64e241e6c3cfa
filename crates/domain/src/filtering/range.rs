// crates/domain/src/filtering/range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive range helper used for points and position filtering.
///
/// A missing bound is open on that side. Inverted bounds contain nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value <= m)
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// True when `self` admits no value that `outer` rejects.
    pub fn is_within(&self, outer: &Self) -> bool {
        let min_ok = match (outer.min, self.min) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(o), Some(s)) => s >= o,
        };
        let max_ok = match (outer.max, self.max) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(o), Some(s)) => s <= o,
        };
        min_ok && max_ok
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = &self.min {
            write!(f, "{min}")?;
        }
        f.write_str("..")?;
        if let Some(max) = &self.max {
            write!(f, "{max}")?;
        }
        Ok(())
    }
}

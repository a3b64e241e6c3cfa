// crates/domain/src/filtering/criteria.rs
use std::collections::BTreeSet;

use serde::Serialize;

use super::Range;
use crate::model::RaceResultRow;

/// Filter settings for one interaction.
///
/// Empty name sets place no restriction. The position range is always
/// applied, so rows without a finishing position never match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub points_range: Range<f64>,
    pub position_range: Range<u32>,
    pub selected_races: BTreeSet<String>,
    pub selected_constructors: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria whose ranges span every value observed in `rows`.
    pub fn covering(rows: &[RaceResultRow]) -> Self {
        let points = rows.iter().map(|row| row.points).fold(None, |acc: Option<(f64, f64)>, p| {
            Some(acc.map_or((p, p), |(lo, hi)| (lo.min(p), hi.max(p))))
        });
        let worst_position = rows.iter().filter_map(|row| row.position).max();

        Self {
            points_range: points.map_or_else(Range::unbounded, |(lo, hi)| Range::between(lo, hi)),
            position_range: Range::new(Some(1), worst_position),
            ..Self::default()
        }
    }

    pub fn with_points(mut self, range: Range<f64>) -> Self {
        self.points_range = range;
        self
    }

    pub fn with_positions(mut self, range: Range<u32>) -> Self {
        self.position_range = range;
        self
    }

    pub fn with_races<I, S>(mut self, races: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_races = races.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_constructors<I, S>(mut self, constructors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_constructors = constructors.into_iter().map(Into::into).collect();
        self
    }

    /// Determine whether `row` satisfies every criterion.
    pub fn matches(&self, row: &RaceResultRow) -> bool {
        self.matches_points(row)
            && self.matches_race(row)
            && self.matches_position(row)
            && self.matches_constructor(row)
    }

    fn matches_points(&self, row: &RaceResultRow) -> bool {
        self.points_range.contains(row.points)
    }

    fn matches_race(&self, row: &RaceResultRow) -> bool {
        self.selected_races.is_empty() || self.selected_races.contains(&row.race)
    }

    fn matches_position(&self, row: &RaceResultRow) -> bool {
        row.position.is_some_and(|p| self.position_range.contains(p))
    }

    fn matches_constructor(&self, row: &RaceResultRow) -> bool {
        self.selected_constructors.is_empty() || self.selected_constructors.contains(&row.constructor)
    }
}

use std::collections::BTreeSet;

use f1_results_shared_kernel::Season;
use serde::Serialize;

use crate::{analytics::sort::season_order, filtering::FilterCriteria, model::RaceResultRow};

/// The complete, ordered row-set of one season.
///
/// Rows are sorted by round, then finishing position with non-finishers last,
/// and cannot be mutated once built. Filtering always yields a new vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonResults {
    season: Season,
    rows: Vec<RaceResultRow>,
}

impl SeasonResults {
    pub fn empty(season: Season) -> Self {
        Self { season, rows: Vec::new() }
    }

    /// Sorts `rows` into season order.
    pub fn from_rows(season: Season, mut rows: Vec<RaceResultRow>) -> Self {
        rows.sort_by(season_order);
        Self { season, rows }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn rows(&self) -> &[RaceResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<RaceResultRow> {
        crate::filtering::apply_filters(&self.rows, criteria)
    }

    /// Race names in round order, each listed once.
    pub fn races(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.race.as_str()))
            .map(|row| row.race.clone())
            .collect()
    }

    /// Constructor names, sorted and de-duplicated.
    pub fn constructors(&self) -> Vec<String> {
        distinct_sorted(self.rows.iter().map(|row| row.constructor.as_str()))
    }

    /// Driver names, sorted and de-duplicated.
    pub fn drivers(&self) -> Vec<String> {
        distinct_sorted(self.rows.iter().map(|row| row.driver.as_str()))
    }
}

fn distinct_sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names.collect::<BTreeSet<_>>().into_iter().map(str::to_string).collect()
}

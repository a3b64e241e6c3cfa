use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{analytics::sort::by_total_desc, model::RaceResultRow};

/// Grouping dimension for per-participant reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByKey {
    Driver,
    Constructor,
}

impl ByKey {
    #[inline]
    pub fn key_of(self, row: &RaceResultRow) -> &str {
        match self {
            Self::Driver => &row.driver,
            Self::Constructor => &row.constructor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Constructor => "Constructor",
        }
    }
}

/// Summed points for a single grouping key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub name: String,
    pub points: f64,
    pub entries: usize,
}

/// Number of qualifying finishes for one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishCount {
    pub driver: String,
    pub count: usize,
}

/// Aggregator to group and summarise race results by requested keys.
pub struct Aggregator;

impl Aggregator {
    /// Points per key, highest first; ties are broken by name.
    pub fn standings(rows: &[RaceResultRow], by: ByKey) -> Vec<Standing> {
        let mut map: HashMap<&str, (f64, usize)> = HashMap::new();
        for row in rows {
            let entry = map.entry(by.key_of(row)).or_insert((0.0, 0));
            entry.0 += row.points;
            entry.1 += 1;
        }

        let mut standings: Vec<Standing> = map
            .into_iter()
            .map(|(name, (points, entries))| Standing { name: name.to_string(), points, entries })
            .collect();
        standings.sort_by(|a, b| by_total_desc(a.points, &a.name, b.points, &b.name));
        standings
    }

    pub fn driver_standings(rows: &[RaceResultRow]) -> Vec<Standing> {
        Self::standings(rows, ByKey::Driver)
    }

    pub fn constructor_standings(rows: &[RaceResultRow]) -> Vec<Standing> {
        Self::standings(rows, ByKey::Constructor)
    }

    /// Finishes in positions 1 to 3, per driver.
    pub fn podium_counts(rows: &[RaceResultRow]) -> Vec<FinishCount> {
        Self::count_finishes(rows, RaceResultRow::is_podium)
    }

    /// Race wins per driver.
    pub fn win_counts(rows: &[RaceResultRow]) -> Vec<FinishCount> {
        Self::count_finishes(rows, RaceResultRow::is_win)
    }

    fn count_finishes<F>(rows: &[RaceResultRow], qualifies: F) -> Vec<FinishCount>
    where
        F: Fn(&RaceResultRow) -> bool,
    {
        let mut map: HashMap<&str, usize> = HashMap::new();
        for row in rows.iter().filter(|row| qualifies(row)) {
            *map.entry(row.driver.as_str()).or_insert(0) += 1;
        }

        let mut counts: Vec<FinishCount> =
            map.into_iter().map(|(driver, count)| FinishCount { driver: driver.to_string(), count }).collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.driver.cmp(&b.driver)));
        counts
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{analytics::aggregate::ByKey, model::RaceResultRow};

/// Running totals after one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionStep {
    pub round: u32,
    pub race: String,
    pub totals: BTreeMap<String, f64>,
}

/// Cumulative points per key, one step per round in ascending order.
///
/// A participant absent from a round keeps the total reached so far. Keys
/// first seen in a later round are not back-filled into earlier steps.
pub fn points_progression(rows: &[RaceResultRow], by: ByKey) -> Vec<ProgressionStep> {
    let mut per_round: BTreeMap<u32, (&str, BTreeMap<&str, f64>)> = BTreeMap::new();
    for row in rows {
        let (_, sums) = per_round.entry(row.round).or_insert((row.race.as_str(), BTreeMap::new()));
        *sums.entry(by.key_of(row)).or_insert(0.0) += row.points;
    }

    let mut running: BTreeMap<String, f64> = BTreeMap::new();
    per_round
        .into_iter()
        .map(|(round, (race, sums))| {
            for (name, points) in sums {
                *running.entry(name.to_string()).or_insert(0.0) += points;
            }
            ProgressionStep { round, race: race.to_string(), totals: running.clone() }
        })
        .collect()
}

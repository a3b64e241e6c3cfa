use std::collections::HashSet;

use serde::Serialize;

use crate::{analytics::aggregate::Aggregator, model::RaceResultRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsLeader {
    pub driver: String,
    pub points: f64,
}

/// Headline numbers shown above the detailed tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub races: usize,
    pub drivers: usize,
    pub constructors: usize,
    pub points_leader: Option<PointsLeader>,
}

impl KpiSummary {
    pub fn from_rows(rows: &[RaceResultRow]) -> Self {
        let races = rows.iter().map(|r| r.race.as_str()).collect::<HashSet<_>>().len();
        let drivers = rows.iter().map(|r| r.driver.as_str()).collect::<HashSet<_>>().len();
        let constructors = rows.iter().map(|r| r.constructor.as_str()).collect::<HashSet<_>>().len();
        let points_leader = Aggregator::driver_standings(rows)
            .into_iter()
            .next()
            .map(|standing| PointsLeader { driver: standing.name, points: standing.points });

        Self { races, drivers, constructors, points_leader }
    }
}

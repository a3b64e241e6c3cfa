use std::collections::BTreeMap;

use f1_results_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use crate::model::RaceResultRow;

/// Per-team statistics for the constructor comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorComparison {
    pub constructor: String,
    pub total_points: f64,
    pub mean_points: f64,
    pub mean_position: Option<f64>,
    pub best_position: Option<u32>,
    pub entries: usize,
}

/// Per-driver statistics for head-to-head comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverComparison {
    pub driver: String,
    pub points: f64,
    pub avg_position: Option<f64>,
    pub podiums: usize,
    pub wins: usize,
    pub races: usize,
}

/// One entry per constructor, sorted by name. Means are rounded to 2 places.
pub fn constructor_comparison(rows: &[RaceResultRow]) -> Vec<ConstructorComparison> {
    let mut grouped: BTreeMap<&str, Vec<&RaceResultRow>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.constructor.as_str()).or_default().push(row);
    }

    grouped
        .into_iter()
        .map(|(constructor, team_rows)| {
            let total_points: f64 = team_rows.iter().map(|r| r.points).sum();
            let positions: Vec<u32> = team_rows.iter().filter_map(|r| r.position).collect();
            ConstructorComparison {
                constructor: constructor.to_string(),
                total_points: round2(total_points),
                mean_points: round2(total_points / team_rows.len() as f64),
                mean_position: mean(&positions).map(round2),
                best_position: positions.iter().copied().min(),
                entries: team_rows.len(),
            }
        })
        .collect()
}

/// Statistics for each requested driver, in request order.
pub fn driver_comparison(rows: &[RaceResultRow], drivers: &[String]) -> Vec<DriverComparison> {
    drivers
        .iter()
        .map(|driver| {
            let own: Vec<&RaceResultRow> = rows.iter().filter(|r| &r.driver == driver).collect();
            let positions: Vec<u32> = own.iter().filter_map(|r| r.position).collect();
            DriverComparison {
                driver: driver.clone(),
                points: own.iter().map(|r| r.points).sum(),
                avg_position: mean(&positions).map(round2),
                podiums: own.iter().filter(|r| r.is_podium()).count(),
                wins: own.iter().filter(|r| r.is_win()).count(),
                races: own.len(),
            }
        })
        .collect()
}

/// Head-to-head needs exactly two drivers.
pub fn head_to_head(rows: &[RaceResultRow], drivers: &[String]) -> DomainResult<Vec<DriverComparison>> {
    if drivers.len() != 2 {
        return Err(DomainError::HeadToHeadArity { count: drivers.len() });
    }
    Ok(driver_comparison(rows, drivers))
}

fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(round: u32, driver: &str, constructor: &str, position: Option<u32>, points: f64) -> RaceResultRow {
        RaceResultRow {
            round,
            race: format!("Race {round}"),
            date: NaiveDate::from_ymd_opt(2023, 6, round).unwrap(),
            driver: driver.to_string(),
            constructor: constructor.to_string(),
            position,
            points,
            status: String::new(),
        }
    }

    fn sample() -> Vec<RaceResultRow> {
        vec![
            row(1, "Lewis Hamilton", "Mercedes", Some(2), 18.0),
            row(1, "George Russell", "Mercedes", Some(4), 12.0),
            row(1, "Lando Norris", "McLaren", None, 0.0),
            row(2, "Lewis Hamilton", "Mercedes", Some(1), 25.0),
            row(2, "George Russell", "Mercedes", Some(5), 10.0),
            row(2, "Lando Norris", "McLaren", Some(3), 15.0),
        ]
    }

    #[test]
    fn constructor_comparison_reports_means_and_best() {
        let table = constructor_comparison(&sample());
        assert_eq!(table.len(), 2);

        let mclaren = &table[0];
        assert_eq!(mclaren.constructor, "McLaren");
        assert_eq!(mclaren.mean_points, 7.5);
        assert_eq!(mclaren.mean_position, Some(3.0));
        assert_eq!(mclaren.entries, 2);

        let mercedes = &table[1];
        assert_eq!(mercedes.total_points, 65.0);
        assert_eq!(mercedes.mean_points, 16.25);
        assert_eq!(mercedes.mean_position, Some(3.0));
        assert_eq!(mercedes.best_position, Some(1));
    }

    #[test]
    fn driver_comparison_counts_podiums_and_wins() {
        let drivers = vec!["Lewis Hamilton".to_string(), "Lando Norris".to_string()];
        let stats = head_to_head(&sample(), &drivers).unwrap();
        assert_eq!(stats[0].points, 43.0);
        assert_eq!(stats[0].avg_position, Some(1.5));
        assert_eq!(stats[0].podiums, 2);
        assert_eq!(stats[0].wins, 1);
        assert_eq!(stats[1].races, 2);
        assert_eq!(stats[1].podiums, 1);
        assert_eq!(stats[1].avg_position, Some(3.0));
    }

    #[test]
    fn head_to_head_requires_two_drivers() {
        let err = head_to_head(&sample(), &["Lewis Hamilton".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::HeadToHeadArity { count: 1 }));
    }

    #[test]
    fn unknown_driver_has_empty_stats() {
        let stats = driver_comparison(&sample(), &["Nobody".to_string()]);
        assert_eq!(stats[0].races, 0);
        assert_eq!(stats[0].avg_position, None);
    }
}

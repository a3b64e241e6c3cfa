//! Multi-criteria row filtering.

pub mod criteria;
pub mod range;

pub use criteria::FilterCriteria;
pub use range::Range;

use crate::model::RaceResultRow;

/// Returns the rows matching all of `criteria`, in input order.
pub fn apply_filters(rows: &[RaceResultRow], criteria: &FilterCriteria) -> Vec<RaceResultRow> {
    rows.iter().filter(|row| criteria.matches(row)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(round: u32, race: &str, driver: &str, constructor: &str, position: Option<u32>, points: f64) -> RaceResultRow {
        RaceResultRow {
            round,
            race: race.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
            driver: driver.to_string(),
            constructor: constructor.to_string(),
            position,
            points,
            status: if position.is_some() { "Finished".into() } else { "Accident".into() },
        }
    }

    fn two_race_season() -> Vec<RaceResultRow> {
        vec![
            row(1, "A", "X", "Red Bull", Some(1), 25.0),
            row(1, "A", "Y", "Ferrari", Some(2), 18.0),
            row(2, "B", "X", "Red Bull", Some(3), 15.0),
            row(2, "B", "Y", "Ferrari", None, 0.0),
        ]
    }

    fn keys(rows: &[RaceResultRow]) -> Vec<(&str, &str)> {
        rows.iter().map(|r| (r.race.as_str(), r.driver.as_str())).collect()
    }

    #[test]
    fn position_range_excludes_lower_finishers_and_non_finishers() {
        let criteria = FilterCriteria::default().with_positions(Range::between(1, 2));
        let filtered = apply_filters(&two_race_season(), &criteria);
        assert_eq!(keys(&filtered), vec![("A", "X"), ("A", "Y")]);
    }

    #[test]
    fn default_criteria_still_drop_rows_without_position() {
        let filtered = apply_filters(&two_race_season(), &FilterCriteria::default());
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.position.is_some()));
    }

    #[test]
    fn empty_selections_do_not_restrict() {
        let criteria = FilterCriteria::default().with_races(Vec::<String>::new());
        assert_eq!(apply_filters(&two_race_season(), &criteria).len(), 3);
    }

    #[test]
    fn race_and_constructor_sets_combine_with_and() {
        let criteria = FilterCriteria::default().with_races(["B"]).with_constructors(["Red Bull"]);
        let filtered = apply_filters(&two_race_season(), &criteria);
        assert_eq!(keys(&filtered), vec![("B", "X")]);
    }

    #[test]
    fn points_bounds_are_inclusive() {
        let criteria = FilterCriteria::default().with_points(Range::between(15.0, 18.0));
        let filtered = apply_filters(&two_race_season(), &criteria);
        assert_eq!(keys(&filtered), vec![("A", "Y"), ("B", "X")]);
    }

    #[test]
    fn inverted_ranges_yield_nothing() {
        let criteria = FilterCriteria::default().with_points(Range::between(30.0, 10.0));
        assert!(apply_filters(&two_race_season(), &criteria).is_empty());
    }

    #[test]
    fn source_rows_are_left_untouched() {
        let rows = two_race_season();
        let before = rows.clone();
        let _ = apply_filters(&rows, &FilterCriteria::default().with_races(["A"]));
        assert_eq!(rows, before);
    }

    #[test]
    fn covering_spans_observed_values() {
        let criteria = FilterCriteria::covering(&two_race_season());
        assert_eq!(criteria.points_range, Range::between(0.0, 25.0));
        assert_eq!(criteria.position_range, Range::between(1, 3));
        assert!(criteria.selected_races.is_empty());
    }

    #[test]
    fn covering_empty_rows_is_unbounded() {
        let criteria = FilterCriteria::covering(&[]);
        assert_eq!(criteria.points_range, Range::unbounded());
        assert_eq!(criteria.position_range, Range::new(Some(1), None));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names of a row, in export order.
pub const ROW_COLUMNS: [&str; 8] = ["round", "race", "date", "driver", "constructor", "position", "points", "status"];

/// One driver's result in one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResultRow {
    pub round: u32,
    pub race: String,
    pub date: NaiveDate,
    pub driver: String,
    pub constructor: String,
    /// `None` when the driver did not finish or the raw value was not numeric.
    pub position: Option<u32>,
    pub points: f64,
    pub status: String,
}

impl RaceResultRow {
    #[inline]
    pub fn finished_within(&self, best: u32, worst: u32) -> bool {
        self.position.is_some_and(|p| (best..=worst).contains(&p))
    }

    #[inline]
    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    #[inline]
    pub fn is_podium(&self) -> bool {
        self.finished_within(1, 3)
    }
}

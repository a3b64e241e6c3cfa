pub mod race_result;
pub mod season_results;

pub use race_result::{ROW_COLUMNS, RaceResultRow};
pub use season_results::SeasonResults;

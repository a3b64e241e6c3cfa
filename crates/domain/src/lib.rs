#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod filtering;
pub mod model;
pub mod parsing;
pub mod session;

pub use filtering::{FilterCriteria, Range, apply_filters};
pub use model::{ROW_COLUMNS, RaceResultRow, SeasonResults};
pub use session::SessionState;

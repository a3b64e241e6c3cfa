pub mod aggregate;
pub mod comparison;
pub mod kpi;
pub mod progression;
pub mod sort;

pub use aggregate::{Aggregator, ByKey, FinishCount, Standing};
pub use comparison::{ConstructorComparison, DriverComparison, constructor_comparison, driver_comparison, head_to_head};
pub use kpi::{KpiSummary, PointsLeader};
pub use progression::{ProgressionStep, points_progression};

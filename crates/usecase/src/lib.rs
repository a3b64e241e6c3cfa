//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement the
//! application's use cases:
//!
//! - [`season_results`]: Walks a season's paginated results into rows
//! - [`seasons`]: Lists available seasons with a fallback
//! - [`snapshot`]: Captures one raw page for offline inspection
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod season_results;
pub mod seasons;
pub mod snapshot;

pub use dto::{PaginationReport, StopReason};
pub use season_results::BuildSeasonResults;
pub use seasons::ListSeasons;
pub use snapshot::{FetchSnapshot, SnapshotRequest};

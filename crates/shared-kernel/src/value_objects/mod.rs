// crates/shared-kernel/src/value_objects/mod.rs
pub mod page;
pub mod season;

pub use page::{DEFAULT_PAGE_LIMIT, PageRequest};
pub use season::{DEFAULT_SEASON, FIRST_SEASON, Season};

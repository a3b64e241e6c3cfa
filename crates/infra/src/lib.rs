// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod export;
pub mod http;
pub mod persistence;
pub mod settings;

pub use cache::{NoCache, SystemClock, TtlCache};
pub use http::HttpFetcher;
pub use settings::{FetchSettings, FetchSettingsBuilder};

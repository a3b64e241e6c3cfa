//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`results_api`]: Fetching pages from the results API
//! - [`cache`]: Memoising fetched pages and the clock that ages them
//! - [`wire`]: Typed views over the API's JSON envelope
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod results_api;
pub mod wire;

pub use cache::{Clock, ResponseCache};
pub use results_api::{RawPage, ResultsSource};

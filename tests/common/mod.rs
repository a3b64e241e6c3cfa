// tests/common/mod.rs
//! Shared helpers for CLI tests.

pub mod fake_api;
pub mod fixtures;

#[allow(unused_imports)]
pub use fake_api::FakeApi;
#[allow(unused_imports)]
pub use fixtures::*;

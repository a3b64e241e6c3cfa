//! Command-line test suite.

mod common;

#[path = "cli/end_to_end.rs"]
mod end_to_end;
#[path = "cli/smoke_tests.rs"]
mod smoke_tests;

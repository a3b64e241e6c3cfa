// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod explore;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

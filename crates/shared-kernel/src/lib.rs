// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DataShapeError, DataShapeResult, DomainError, DomainResult, ErrorContext, F1ResultsError, FetchError,
    FetchResult, InfraResult, InfrastructureError, ParseWarning, PresentationError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{DEFAULT_PAGE_LIMIT, DEFAULT_SEASON, FIRST_SEASON, PageRequest, Season};

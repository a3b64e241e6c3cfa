// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum F1ResultsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<F1ResultsError>,
    },

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Data shape error: {0}")]
    DataShape(#[from] DataShapeError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, F1ResultsError>;

/// Failure of a single request against the results API.
///
/// Every variant carries a message meant for humans; callers never need to
/// inspect a transport library error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("transport failure for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed JSON from {url}: {message}")]
    MalformedJson { url: String, message: String },
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// The response parsed as JSON but lacks the nested fields we read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataShapeError {
    #[error("missing field '{path}'")]
    MissingField { path: String },

    #[error("field '{path}' has unexpected value '{value}'")]
    InvalidValue { path: String, value: String },

    #[error("unexpected layout: {details}")]
    Layout { details: String },
}

pub type DataShapeResult<T> = std::result::Result<T, DataShapeError>;

/// A raw field that could not be coerced and was replaced by its default.
///
/// Never surfaced as a hard error; callers log it and keep the default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("non-numeric position '{raw}'")]
    NonNumericPosition { raw: String },

    #[error("points value missing")]
    MissingPoints,

    #[error("unparseable points '{raw}'")]
    InvalidPoints { raw: String },
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid season '{value}': {reason}")]
    InvalidSeason { value: String, reason: String },

    #[error("Head-to-head needs exactly two drivers, got {count}")]
    HeadToHeadArity { count: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("HTTP client construction failed: {details}")]
    HttpClient { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for F1ResultsError {
    fn from(err: std::io::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

impl InfrastructureError {
    fn serialization(format: &str, err: impl std::fmt::Display) -> Self {
        Self::SerializationError { format: format.to_owned(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<serde_json::Error> for F1ResultsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization("YAML", err)
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for F1ResultsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

/// Wraps any layer error in [`F1ResultsError::Context`].
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<F1ResultsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|err| F1ResultsError::Context { context: f(), source: Box::new(err.into()) })
    }
}

// src/error.rs
use std::process::ExitCode;

use f1_results_shared_kernel::F1ResultsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] F1ResultsError),

    /// The season had no rows, or nothing survived the filters.
    #[error("{0}")]
    NoData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData(message.into())
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoData(_) => ExitCode::from(3),
            Self::Core(_) | Self::Io(_) => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

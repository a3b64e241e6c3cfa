// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use f1_results_shared_kernel::{InfraResult, InfrastructureError};

/// Reads small text inputs such as settings files.
pub struct FileReader;

impl FileReader {
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}

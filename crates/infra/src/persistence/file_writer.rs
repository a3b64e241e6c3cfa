// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use f1_results_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing export artifacts.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create(path: &Path) -> InfraResult<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    /// Write `data` to `path` via a sibling temp file and rename, so readers
    /// never observe a half-written export.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let wrap = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("export");
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{file_name}.{}.{nanos}.tmp", std::process::id()));

        let result = (|| -> std::io::Result<()> {
            let mut w = BufWriter::new(File::create(&tmp)?);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result.map_err(wrap)
    }
}

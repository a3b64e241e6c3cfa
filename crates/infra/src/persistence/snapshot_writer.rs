// crates/infra/src/persistence/snapshot_writer.rs
use std::path::Path;

use f1_results_ports::RawPage;
use f1_results_shared_kernel::InfraResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::file_writer::FileWriter;

pub const DEFAULT_SNAPSHOT_FILE: &str = "data.json";

/// Renders a page body as pretty JSON with four-space indentation.
///
/// Non-ASCII characters are written as UTF-8, never `\u` escaped.
pub fn render_snapshot(page: &RawPage) -> InfraResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    page.body().serialize(&mut ser)?;
    Ok(buf)
}

pub fn write_snapshot(page: &RawPage, path: &Path) -> InfraResult<()> {
    let rendered = render_snapshot(page)?;
    FileWriter::atomic_write(path, &rendered)
}

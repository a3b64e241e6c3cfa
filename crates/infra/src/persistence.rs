// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;
pub mod snapshot_writer;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use snapshot_writer::{DEFAULT_SNAPSHOT_FILE, render_snapshot, write_snapshot};

// crates/infra/src/export.rs
//! Delimited (CSV/TSV) rendering of result rows.

use std::{io::Write, path::Path};

use f1_results_domain::{ROW_COLUMNS, RaceResultRow, parsing::API_DATE_FORMAT};
use f1_results_shared_kernel::{InfraResult, Season};

use crate::persistence::FileWriter;

/// File name used when the caller gives no export path.
pub fn default_export_file_name(season: Season) -> String {
    format!("f1_{season}_filtered_data.csv")
}

pub fn write_delimited(rows: &[RaceResultRow], sep: char, out: &mut impl Write) -> InfraResult<()> {
    write_delimited_table(&ROW_COLUMNS, rows.iter().map(row_cells), sep, out)
}

/// Renders `rows` as CSV and atomically writes them to `path`.
pub fn export_csv(rows: &[RaceResultRow], path: &Path) -> InfraResult<()> {
    let mut buf = Vec::new();
    write_delimited(rows, ',', &mut buf)?;
    FileWriter::atomic_write(path, &buf)
}

/// Writes a header line and one line per record, escaping every cell.
pub fn write_delimited_table<I>(headers: &[&str], records: I, sep: char, out: &mut impl Write) -> InfraResult<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let header: Vec<String> = headers.iter().map(|h| escape_field(h, sep)).collect();
    writeln!(out, "{}", header.join(&sep.to_string()))?;
    for record in records {
        let cells: Vec<String> = record.iter().map(|c| escape_field(c, sep)).collect();
        writeln!(out, "{}", cells.join(&sep.to_string()))?;
    }
    Ok(())
}

/// Cells of one row in [`ROW_COLUMNS`] order; an absent position is empty.
pub fn row_cells(row: &RaceResultRow) -> Vec<String> {
    vec![
        row.round.to_string(),
        row.race.clone(),
        row.date.format(API_DATE_FORMAT).to_string(),
        row.driver.clone(),
        row.constructor.clone(),
        row.position.map(|p| p.to_string()).unwrap_or_default(),
        row.points.to_string(),
        row.status.clone(),
    ]
}

/// CSV quotes only when needed; TSV replaces tabs and newlines with spaces.
pub fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' {
        if s.contains([',', '"', '\n', '\r']) {
            let escaped = s.replace('"', "\"\"");
            format!("\"{escaped}\"")
        } else {
            s.to_string()
        }
    } else {
        s.replace([sep, '\n', '\r'], " ")
    }
}

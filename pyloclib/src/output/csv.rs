//! CSV persistence of a [`Report`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::Result;

use super::report::Report;

/// Default file name of the persisted report.
pub const DEFAULT_REPORT_FILE: &str = "code_statistics.csv";

/// Quote a field when it holds a separator, a quote or a line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write>(writer: &mut W, fields: &[String]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(writer, "{}", line.join(","))
}

/// Write the report as CSV: a header line, then one line per row in
/// discovery order.
pub fn write_csv<W: Write>(report: &Report, mut writer: W) -> std::io::Result<()> {
    write_record(&mut writer, &report.headers())?;
    for row in &report.rows {
        write_record(&mut writer, &row.cells())?;
    }
    writer.flush()
}

/// Render the report as a CSV string.
pub fn to_csv_string(report: &Report) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(report, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Persist the report to `path`, replacing any existing file.
pub fn persist(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(report, BufWriter::new(file))?;
    info!("wrote {} rows to {}", report.rows.len(), path.display());
    Ok(())
}

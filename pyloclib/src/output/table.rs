//! Ranked console view of a report.
//!
//! `ReportTable` holds the top rows as display strings; `render` draws them
//! as a bordered grid:
//!
//! ```text
//! +------+------+-------+
//! | root | file | total |
//! +------+------+-------+
//! | /p   | a.py |    12 |
//! +------+------+-------+
//! ```
//!
//! Headers are styled cyan when colors are enabled. Count columns are
//! right-aligned, path columns left-aligned.

use console::{measure_text_width, pad_str, Alignment, Style};
use serde::{Deserialize, Serialize};

use super::report::Report;

/// Default number of rows in the ranked view.
pub const DEFAULT_TOP: usize = 10;

/// Table-ready rows of the ranked view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers
    pub headers: Vec<String>,
    /// Rows, highest `total` first
    pub rows: Vec<Vec<String>>,
    /// Number of leading left-aligned columns (path levels and file name)
    pub text_columns: usize,
}

impl ReportTable {
    /// Build the view of the `n` largest files of `report`.
    pub fn top(report: &Report, n: usize) -> Self {
        ReportTable {
            headers: report.headers(),
            rows: report.top(n).iter().map(|row| row.cells()).collect(),
            // Everything except the numeric columns after `file`
            text_columns: report.level_columns + 1,
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .chain(std::iter::once(measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render as a bordered table. `colored` styles the headers.
    pub fn render(&self, colored: bool) -> String {
        let widths = self.widths();
        let border = format!(
            "+{}+",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );
        let header_style = Style::new().cyan().force_styling(colored);

        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');

        let header_cells: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| {
                let padded = pad_str(h, *w, Alignment::Center, None);
                header_style.apply_to(padded).to_string()
            })
            .collect();
        out.push_str(&format_line(&header_cells));
        out.push_str(&border);
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let align = if i < self.text_columns {
                        Alignment::Left
                    } else {
                        Alignment::Right
                    };
                    pad_str(cell, *w, align, None).into_owned()
                })
                .collect();
            out.push_str(&format_line(&cells));
        }

        if !self.rows.is_empty() {
            out.push_str(&border);
            out.push('\n');
        }
        out
    }
}

fn format_line(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// One-line aggregate for the end of a run.
pub fn summary_line(report: &Report) -> String {
    let mut line = format!(
        "Total ({} files): {} code / {} total lines",
        report.summary.file_count, report.summary.code, report.summary.total
    );
    if report.summary.skipped > 0 {
        line.push_str(&format!(", {} skipped", report.summary.skipped));
    }
    line
}

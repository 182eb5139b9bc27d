//! Output: present results as a report.
//!
//! This module handles the last stage of the pipeline - turning per-file
//! counts into a tabular report. It provides:
//!
//! - **Report**: rows of path levels plus counts, with an aggregate summary
//! - **CSV**: persistence of the report in discovery order
//! - **ReportTable**: ranked top-N console view
//!
//! ## Example
//!
//! ```rust,ignore
//! use pyloclib::output::{persist, Report, ReportTable};
//!
//! let report = Report::from_scan(&result);
//! persist(&report, "code_statistics.csv")?;
//! print!("{}", ReportTable::top(&report, 10).render(true));
//! ```

pub mod csv;
pub mod report;
pub mod table;

pub use csv::{persist, to_csv_string, write_csv, DEFAULT_REPORT_FILE};
pub use report::{PathBreakdown, Report, ReportRow, ReportSummary, COUNT_COLUMNS, ROOT_COLUMN};
pub use table::{summary_line, ReportTable, DEFAULT_TOP};

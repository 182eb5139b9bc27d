//! # pyloclib
//!
//! A lines of code counter for Python source trees that separates code,
//! comments, docstrings, and blank lines, per file and per directory level.
//!
//! ## Overview
//!
//! Generic LOC counters treat docstrings as code or as strings. This library
//! counts them on their own, including multi-line blocks between `"""` or `'''`
//! fences, and makes sure a `#` line inside such a block is not mistaken for a
//! comment. Each physical line lands in exactly one bucket:
//!
//! - **Code**: Executable lines
//! - **Docstring**: Single-line docstrings and every line of a fenced block
//! - **Comments**: Lines starting with `#`
//! - **Blank**: Whitespace-only lines
//!
//! ## Pipeline
//!
//! 1. [`source`]: walk the tree, bounded by a maximum depth and exclusions
//! 2. [`data`]: classify each file into [`Locs`]
//! 3. [`output`]: build a [`Report`], persist it as CSV, rank the largest files
//!
//! ## Example
//!
//! ```rust
//! use pyloclib::{scan, FilterConfig, Report, ReportTable, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::write(dir.path().join("a.py"), "code_line\n\n# comment").unwrap();
//! fs::write(dir.path().join("sub/b.py"), "\"\"\"doc\"\"\"").unwrap();
//!
//! let options = ScanOptions::new()
//!     .max_depth(2)
//!     .filter(FilterConfig::new().exclude("venv"));
//! let result = scan(dir.path(), options).unwrap();
//!
//! let report = Report::from_scan(&result);
//! assert_eq!(report.rows.len(), 2);
//! assert_eq!(report.summary.code, 1);
//!
//! let table = ReportTable::top(&report, 10).render(false);
//! assert!(table.contains("b.py"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    classify, classify_str, count_file, scan, FileCounts, LineCategory, LineClassifier, Locs,
    ScanOptions, ScanResult, SkippedFile, DEFAULT_MAX_DEPTH,
};
pub use error::PylocError;
pub use output::{
    persist, summary_line, to_csv_string, write_csv, PathBreakdown, Report, ReportRow,
    ReportSummary, ReportTable, DEFAULT_REPORT_FILE, DEFAULT_TOP,
};
pub use source::{relative_path, walk, DiscoveredFiles, FilterConfig};

/// Result type for pyloclib operations
pub type Result<T> = std::result::Result<T, PylocError>;

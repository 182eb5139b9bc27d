//! Tabular report over per-file results.
//!
//! Each row pairs a file's [`Locs`] with its path broken down into directory
//! levels. Level 1 is the scan root itself; level `i` (for `i >= 2`) is the
//! `i - 1`-th directory below it. The number of level columns is the deepest
//! file-bearing level observed during the walk, capped at the configured
//! maximum depth.
//!
//! Rows keep discovery order. Ranking is a separate read-only view
//! ([`Report::top`]) so the persisted report never changes order.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::counter::ScanResult;
use crate::data::stats::{FileCounts, Locs};
use crate::source::walker::relative_path;

/// Header of the first level column.
pub const ROOT_COLUMN: &str = "root";

/// Headers of the count columns, in output order.
pub const COUNT_COLUMNS: [&str; 6] = ["file", "total", "docstring", "comments", "blank", "code"];

/// A file path split into directory levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathBreakdown {
    /// One entry per level column. `None` when the file has no directory at
    /// that level, which keeps "no subdirectory" apart from an empty name.
    pub levels: Vec<Option<String>>,
    /// File name.
    pub file: String,
}

impl PathBreakdown {
    /// Split `path` below `root` into `level_count` level columns.
    ///
    /// Directories beyond the last column are dropped.
    pub fn new(path: &Path, root: &Path, level_count: usize) -> Self {
        let relative = relative_path(path, root);
        let mut segments: Vec<&str> = relative.split('/').collect();
        let file = segments.pop().unwrap_or_default().to_string();

        let mut levels = vec![None; level_count.max(1)];
        levels[0] = Some(root.display().to_string());
        for (slot, segment) in levels.iter_mut().skip(1).zip(segments) {
            *slot = Some(segment.to_string());
        }

        Self { levels, file }
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Full path of the file
    pub path: PathBuf,
    /// Directory levels and file name
    pub breakdown: PathBreakdown,
    /// Line counts
    pub locs: Locs,
}

impl ReportRow {
    /// Row values as strings, in header order. Absent levels are empty.
    pub fn cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self
            .breakdown
            .levels
            .iter()
            .map(|level| level.clone().unwrap_or_default())
            .collect();
        cells.push(self.breakdown.file.clone());
        cells.extend(
            [
                self.locs.total,
                self.locs.docstring,
                self.locs.comments,
                self.locs.blank,
                self.locs.code,
            ]
            .iter()
            .map(u64::to_string),
        );
        cells
    }
}

/// Aggregate over all rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Number of rows
    pub file_count: usize,
    /// Files left out because they could not be read or decoded
    pub skipped: usize,
    /// Sum of `code` over all rows
    pub code: u64,
    /// Sum of `total` over all rows
    pub total: u64,
}

/// The full report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Scan root
    pub root: PathBuf,
    /// Number of directory level columns
    pub level_columns: usize,
    /// Rows in discovery order
    pub rows: Vec<ReportRow>,
    /// Aggregate summary
    pub summary: ReportSummary,
}

impl Report {
    /// Build a report from per-file results.
    ///
    /// `observed_depth` is the deepest file-bearing level seen by the walk; the
    /// level column count is `observed_depth` capped at `max_depth`.
    pub fn build(
        files: &[FileCounts],
        root: &Path,
        max_depth: usize,
        observed_depth: usize,
    ) -> Self {
        let level_columns = observed_depth.min(max_depth).max(1);

        let rows: Vec<ReportRow> = files
            .iter()
            .map(|f| ReportRow {
                path: f.path.clone(),
                breakdown: PathBreakdown::new(&f.path, root, level_columns),
                locs: f.locs,
            })
            .collect();

        let summary = ReportSummary {
            file_count: rows.len(),
            skipped: 0,
            code: rows.iter().map(|r| r.locs.code).sum(),
            total: rows.iter().map(|r| r.locs.total).sum(),
        };

        Report {
            root: root.to_path_buf(),
            level_columns,
            rows,
            summary,
        }
    }

    /// Build a report from a finished scan.
    pub fn from_scan(scan: &ScanResult) -> Self {
        let mut report = Self::build(
            &scan.files,
            &scan.root,
            scan.max_depth,
            scan.observed_depth,
        );
        report.summary.skipped = scan.skipped.len();
        report
    }

    /// Column headers: `root`, `subpath_2` .. `subpath_n`, then the counts.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![ROOT_COLUMN.to_string()];
        headers.extend((2..=self.level_columns).map(|i| format!("subpath_{}", i)));
        headers.extend(COUNT_COLUMNS.iter().map(|c| c.to_string()));
        headers
    }

    /// The `n` rows with the highest `total`, descending. Ties keep
    /// discovery order.
    pub fn top(&self, n: usize) -> Vec<&ReportRow> {
        let mut ranked: Vec<&ReportRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| b.locs.total.cmp(&a.locs.total));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(path: &str, total: u64, code: u64) -> FileCounts {
        FileCounts::new(
            PathBuf::from(path),
            Locs {
                total,
                docstring: 0,
                comments: 0,
                blank: total - code,
                code,
            },
        )
    }

    #[test]
    fn test_breakdown_file_under_root() {
        let b = PathBreakdown::new(Path::new("/proj/a.py"), Path::new("/proj"), 3);

        assert_eq!(b.levels, vec![Some("/proj".to_string()), None, None]);
        assert_eq!(b.file, "a.py");
    }

    #[test]
    fn test_breakdown_nested() {
        let b = PathBreakdown::new(Path::new("/proj/pkg/sub/m.py"), Path::new("/proj"), 3);

        assert_eq!(
            b.levels,
            vec![
                Some("/proj".to_string()),
                Some("pkg".to_string()),
                Some("sub".to_string())
            ]
        );
        assert_eq!(b.file, "m.py");
    }

    #[test]
    fn test_breakdown_truncates_extra_levels() {
        let b = PathBreakdown::new(Path::new("/proj/a/b/c/m.py"), Path::new("/proj"), 2);

        assert_eq!(b.levels, vec![Some("/proj".to_string()), Some("a".to_string())]);
        assert_eq!(b.file, "m.py");
    }

    #[test]
    fn test_level_columns_capped() {
        let files = vec![counts("/proj/a.py", 3, 1)];

        let report = Report::build(&files, Path::new("/proj"), 3, 7);
        assert_eq!(report.level_columns, 3);
        assert_eq!(
            report.headers(),
            vec![
                "root",
                "subpath_2",
                "subpath_3",
                "file",
                "total",
                "docstring",
                "comments",
                "blank",
                "code"
            ]
        );

        let report = Report::build(&files, Path::new("/proj"), 3, 1);
        assert_eq!(report.level_columns, 1);
        assert_eq!(report.headers()[0], "root");
        assert_eq!(report.headers()[1], "file");
    }

    #[test]
    fn test_rows_keep_discovery_order_and_summary() {
        let files = vec![
            counts("/proj/small.py", 2, 1),
            counts("/proj/pkg/big.py", 50, 30),
            counts("/proj/mid.py", 10, 4),
        ];

        let report = Report::build(&files, Path::new("/proj"), 3, 2);

        let order: Vec<&str> = report.rows.iter().map(|r| r.breakdown.file.as_str()).collect();
        assert_eq!(order, vec!["small.py", "big.py", "mid.py"]);
        assert_eq!(report.summary.file_count, 3);
        assert_eq!(report.summary.code, 35);
        assert_eq!(report.summary.total, 62);
    }

    #[test]
    fn test_top_is_stable_and_bounded() {
        let files = vec![
            counts("/p/a.py", 5, 1),
            counts("/p/b.py", 9, 1),
            counts("/p/c.py", 5, 1),
            counts("/p/d.py", 1, 1),
        ];
        let report = Report::build(&files, Path::new("/p"), 3, 1);

        let top: Vec<&str> = report
            .top(3)
            .iter()
            .map(|r| r.breakdown.file.as_str())
            .collect();
        assert_eq!(top, vec!["b.py", "a.py", "c.py"]);

        // The report itself is untouched
        assert_eq!(report.rows[0].breakdown.file, "a.py");
        assert_eq!(report.top(10).len(), 4);
    }

    #[test]
    fn test_cells() {
        let files = vec![counts("/p/pkg/m.py", 4, 3)];
        let report = Report::build(&files, Path::new("/p"), 3, 3);

        assert_eq!(
            report.rows[0].cells(),
            vec!["/p", "pkg", "", "m.py", "4", "0", "0", "1", "3"]
        );
    }
}

//! High-level scanning API.
//!
//! This module provides the main entry points for counting lines in a tree
//! of Python sources: discovery, per-file classification and collection of
//! the per-file results.

use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::PylocError;
use crate::source::filter::FilterConfig;
use crate::source::walker::walk;
use crate::Result;

use super::classifier::classify_str;
use super::stats::{FileCounts, Locs};

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Options for scanning a tree.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directories deeper than this are not scanned for files
    pub max_depth: usize,
    /// Directory exclusions
    pub file_filter: FilterConfig,
    /// Classify files on the rayon thread pool
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            file_filter: FilterConfig::new(),
            parallel: false,
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Classify files concurrently.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A file left out of the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of scanning a tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Absolute scan root
    pub root: PathBuf,
    /// Depth bound used for the scan
    pub max_depth: usize,
    /// Deepest file-bearing directory level seen, see [`crate::DiscoveredFiles`]
    pub observed_depth: usize,
    /// Per-file counts in discovery order
    pub files: Vec<FileCounts>,
    /// Files that could not be read or decoded
    pub skipped: Vec<SkippedFile>,
    /// Sum over all counted files
    pub total: Locs,
}

impl ScanResult {
    /// Number of files counted.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Scan a directory tree.
///
/// Fails only when `root` is not a directory. Files that cannot be read or are
/// not valid UTF-8 are logged, recorded in [`ScanResult::skipped`] and left out
/// of the totals.
///
/// # Example
///
/// ```rust
/// use pyloclib::{scan, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("pkg")).unwrap();
/// fs::write(dir.path().join("main.py"), "import pkg\n").unwrap();
/// fs::write(dir.path().join("pkg/__init__.py"), "\"\"\"Package.\"\"\"").unwrap();
///
/// let result = scan(dir.path(), ScanOptions::new().max_depth(2)).unwrap();
/// assert_eq!(result.file_count(), 2);
/// assert_eq!(result.total.code, 1);
/// assert_eq!(result.total.docstring, 1);
/// ```
pub fn scan(root: impl AsRef<Path>, options: ScanOptions) -> Result<ScanResult> {
    let root = root.as_ref();
    let root = std::path::absolute(root)
        .map(|absolute| normalize_lexically(&absolute))
        .map_err(|_| PylocError::InvalidPath(root.into()))?;

    let found = walk(&root, options.max_depth, &options.file_filter)?;
    debug!(
        "discovered {} files under {}",
        found.files.len(),
        root.display()
    );

    let outcomes: Vec<(PathBuf, Result<Locs>)> = if options.parallel {
        found
            .files
            .into_par_iter()
            .map(|path| {
                let outcome = count_file(&path);
                (path, outcome)
            })
            .collect()
    } else {
        found
            .files
            .into_iter()
            .map(|path| {
                let outcome = count_file(&path);
                (path, outcome)
            })
            .collect()
    };

    let mut result = ScanResult {
        root,
        max_depth: options.max_depth,
        observed_depth: found.observed_depth,
        ..ScanResult::default()
    };

    for (path, outcome) in outcomes {
        match outcome {
            Ok(locs) => {
                result.total += locs;
                result.files.push(FileCounts::new(path, locs));
            }
            Err(err) if err.is_per_file() => {
                warn!("{}", err);
                result.skipped.push(SkippedFile {
                    path,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "counted {} files ({} skipped): {} code / {} total lines",
        result.files.len(),
        result.skipped.len(),
        result.total.code,
        result.total.total
    );

    Ok(result)
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Count lines in a single file.
///
/// An empty file yields all zeros and a logged warning.
///
/// # Example
///
/// ```rust
/// use pyloclib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("hello.py");
/// fs::write(&file_path, "# greet\nprint('Hello')\n").unwrap();
///
/// let locs = count_file(&file_path).unwrap();
/// assert_eq!(locs.comments, 1);
/// assert_eq!(locs.code, 1);
/// assert_eq!(locs.blank, 1);
/// assert_eq!(locs.total, 3);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<Locs> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| PylocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| PylocError::FileDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let locs = classify_str(&content);
    if locs.is_empty() {
        warn!("{} is an empty file", path.display());
    } else {
        debug!("{}: {:?}", path.display(), locs);
    }
    Ok(locs)
}

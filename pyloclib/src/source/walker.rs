//! Depth-bounded discovery of source files.
//!
//! The depth of a directory is its number of path components below the scan
//! root plus one, so files directly under the root sit at depth 1. Only
//! directories that hold eligible files take part in the depth bound: a
//! directory without `.py` files is still walked, and its children are
//! judged on their own depth.
//!
//! The walk is top-down. Within a directory, files come first (sorted by
//! name), then subdirectories (sorted by name), so every directory's files are
//! listed before anything below it.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::PylocError;
use crate::Result;

use super::filter::FilterConfig;

/// Files found by [`walk`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFiles {
    /// Eligible files within the depth bound, in discovery order.
    pub files: Vec<PathBuf>,
    /// Deepest level of any directory holding eligible files, including
    /// directories beyond the bound. At least 1.
    pub observed_depth: usize,
}

/// Normalize a path relative to `root` into `/`-separated form.
///
/// Paths outside `root` are returned whole.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Discover eligible source files under `root`.
///
/// Fails with [`PylocError::InvalidPath`] when `root` is missing or is not a
/// directory. Unreadable entries are logged and skipped.
///
/// # Example
///
/// ```rust
/// use pyloclib::{walk, FilterConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir_all(dir.path().join("pkg/deep/er")).unwrap();
/// fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
/// fs::write(dir.path().join("pkg/deep/er/x.py"), "x = 1\n").unwrap();
///
/// let found = walk(dir.path(), 2, &FilterConfig::new()).unwrap();
/// assert_eq!(found.files.len(), 1);
/// assert_eq!(found.observed_depth, 4);
/// ```
pub fn walk(
    root: impl AsRef<Path>,
    max_depth: usize,
    filter: &FilterConfig,
) -> Result<DiscoveredFiles> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(PylocError::InvalidPath(root.to_path_buf()));
    }

    let mut found = DiscoveredFiles {
        files: Vec::new(),
        observed_depth: 1,
    };

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_before_dirs)
        .into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        // Anchored at the root so `/build` also matches a top-level `build`.
        let relative = format!("/{}", relative_path(e.path(), root));
        let excluded = filter.is_excluded(&relative);
        if excluded {
            debug!("skipping excluded directory {}", relative);
        }
        !excluded
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("cannot read directory entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !filter.is_eligible(path) {
            continue;
        }

        // A file at walk depth d lives in a directory of depth d.
        let depth = entry.depth();
        found.observed_depth = found.observed_depth.max(depth);

        if depth <= max_depth {
            found.files.push(path.to_path_buf());
        } else {
            debug!(
                "skipping {} (depth {} > {})",
                path.display(),
                depth,
                max_depth
            );
        }
    }

    Ok(found)
}

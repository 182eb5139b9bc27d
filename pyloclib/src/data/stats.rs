//! Core data structures for line statistics.
//!
//! Every physical line of a source file falls into exactly one of five buckets:
//!
//! - **code**: Executable lines
//! - **docstring**: Documentation string lines, single-line or part of a
//!   triple-quoted block (fences included)
//! - **comments**: Lines starting with `#` outside of a docstring block
//! - **blank**: Empty or whitespace-only lines outside of a docstring block
//!
//! plus the `total`, which always equals the sum of the four buckets.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// The category assigned to a single physical line.
///
/// The three multi-line docstring variants describe where in a block the line
/// sits; they all roll up into the `docstring` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCategory {
    Blank,
    Comment,
    /// `"""text"""`, `'''text'''` or a lone quoted string on one line
    DocstringSingleLine,
    /// Opening fence of a multi-line docstring
    DocstringMultiLineStart,
    /// Any line between the fences
    DocstringMultiLineBody,
    /// Closing fence of a multi-line docstring
    DocstringMultiLineEnd,
    Code,
}

impl LineCategory {
    /// Whether the line counts towards the `docstring` bucket.
    pub fn is_docstring(&self) -> bool {
        matches!(
            self,
            Self::DocstringSingleLine
                | Self::DocstringMultiLineStart
                | Self::DocstringMultiLineBody
                | Self::DocstringMultiLineEnd
        )
    }
}

/// Line counts for one file or an aggregate of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locs {
    /// Total line count (sum of all buckets)
    pub total: u64,
    /// Documentation string lines
    pub docstring: u64,
    /// Comment lines
    pub comments: u64,
    /// Blank lines
    pub blank: u64,
    /// Executable code lines
    pub code: u64,
}

impl Locs {
    /// Create a new Locs with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one line of the given category.
    pub fn record(&mut self, category: LineCategory) {
        self.total += 1;
        match category {
            LineCategory::Blank => self.blank += 1,
            LineCategory::Comment => self.comments += 1,
            LineCategory::Code => self.code += 1,
            _ => self.docstring += 1,
        }
    }

    /// Whether `total` matches the sum of the individual buckets.
    pub fn is_consistent(&self) -> bool {
        self.total == self.docstring + self.comments + self.blank + self.code
    }

    /// True when no line has been counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Add for Locs {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            docstring: self.docstring + other.docstring,
            comments: self.comments + other.comments,
            blank: self.blank + other.blank,
            code: self.code + other.code,
        }
    }
}

impl AddAssign for Locs {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.docstring += other.docstring;
        self.comments += other.comments;
        self.blank += other.blank;
        self.code += other.code;
    }
}

/// Statistics for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCounts {
    /// Path to the file.
    pub path: PathBuf,
    /// Line counts for this file.
    pub locs: Locs,
}

impl FileCounts {
    /// Create new file counts.
    pub fn new(path: PathBuf, locs: Locs) -> Self {
        Self { path, locs }
    }
}

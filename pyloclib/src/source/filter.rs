//! File eligibility and directory exclusion.
//!
//! A file is eligible when its name carries the `.py` extension. Directories
//! are excluded by substring: any directory whose path below the scan root,
//! written as `/dir/sub`, contains one of the configured substrings is skipped
//! together with everything below it.

use std::path::Path;

/// Extension of the files the classifier understands.
pub const SOURCE_EXTENSION: &str = "py";

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Path substrings that exclude a directory
    pub exclude: Vec<String>,
}

impl FilterConfig {
    /// Create a new empty filter config (nothing excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclusion substring. Empty strings are ignored, they would match
    /// every directory.
    pub fn exclude(mut self, substring: &str) -> Self {
        if !substring.is_empty() {
            self.exclude.push(substring.to_string());
        }
        self
    }

    /// Add multiple exclusion substrings.
    pub fn exclude_many(mut self, substrings: &[&str]) -> Self {
        for substring in substrings {
            self = self.exclude(substring);
        }
        self
    }

    /// Check if a file carries the source extension.
    pub fn is_eligible(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    /// Check if a directory, given as its `/`-separated path below the scan
    /// root with a leading `/`, should be skipped.
    pub fn is_excluded(&self, relative_dir: &str) -> bool {
        self.exclude
            .iter()
            .any(|substring| relative_dir.contains(substring.as_str()))
    }
}

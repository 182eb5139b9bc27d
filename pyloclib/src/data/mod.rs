//! Data collection: classify files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading Python
//! source files and counting their lines. It provides:
//!
//! - **Classification**: the per-line state machine (`LineClassifier`)
//! - **Statistics**: Core data structures (`Locs`, `FileCounts`, `LineCategory`)
//! - **Scanning**: High-level API (`scan`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use pyloclib::data::{scan, ScanOptions};
//!
//! let result = scan(".", ScanOptions::new())?;
//! println!("Total code lines: {}", result.total.code);
//! ```

pub mod classifier;
pub mod counter;
pub mod stats;

pub use classifier::{classify, classify_str, split_lines, LineClassifier};
pub use counter::{count_file, scan, ScanOptions, ScanResult, SkippedFile, DEFAULT_MAX_DEPTH};
pub use stats::{FileCounts, LineCategory, Locs};

//! Source discovery: find files to analyze.
//!
//! This module handles the first stage of the pipeline - discovering what
//! files to count. It provides:
//!
//! - **File filtering**: `.py` eligibility and substring-based directory exclusion
//! - **Tree walking**: top-down, depth-bounded traversal of the scan root
//!
//! ## Example
//!
//! ```rust,ignore
//! use pyloclib::source::{walk, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("venv");
//! let found = walk(".", 3, &filter)?;
//! ```

pub mod filter;
pub mod walker;

pub use filter::{FilterConfig, SOURCE_EXTENSION};
pub use walker::{relative_path, walk, DiscoveredFiles};

//! File discovery
//!
//! This module walks the site directory and selects the files
//! that are uploaded, along with their root-relative paths.

pub mod path_utils;
pub mod scanner;

// Re-export commonly used items
pub use path_utils::{is_binary, is_eligible, strip_root};
pub use scanner::{DirectoryScanner, DiscoveredFile, scan};

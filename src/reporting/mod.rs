//! Logging
//!
//! Structured log lines for discovery and upload progress.

pub mod logging;

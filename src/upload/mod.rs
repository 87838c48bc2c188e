//! Upload loop
//!
//! This module turns discovered files into records and writes them
//! to a record store one at a time.

pub mod encoder;
pub mod uploader;

// Re-export commonly used items
pub use encoder::{encode_payload, record_for, record_key};
pub use uploader::{UploadSummary, upload_all};

//! Publish a static documentation site into a remote record store.
//!
//! The site directory is scanned for HTML, CSS, JS and image files, each
//! file becomes one record keyed by its root-relative path, and records are
//! written one at a time through a [`store::RecordStore`].

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod store;
pub mod ui;
pub mod upload;

pub use config::{Config, Credentials, load_credentials};
pub use crate::core::{Result, UploaderError};
pub use discovery::{DirectoryScanner, DiscoveredFile};
pub use store::{HttpRecordStore, Record, RecordStore};
pub use upload::{UploadSummary, upload_all};

//! Core types and foundational components
//!
//! This module contains error handling and the constants shared
//! by discovery, encoding and the record store.

pub mod constants;
pub mod error;

// Re-export commonly used items for convenience
pub use error::{Result, UploaderError};

//! Remote record store
//!
//! The upload loop writes one [`Record`] per discovered file through the
//! [`RecordStore`] trait. [`HttpRecordStore`] talks to the remote datastore.

pub mod http;

pub use http::HttpRecordStore;

use async_trait::async_trait;

use crate::core::constants::records;
use crate::core::error::Result;

/// A datastore entity holding one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: String,
    pub key: String,
    pub payload: String,
}

impl Record {
    pub fn new(kind: impl Into<String>, key: impl Into<String>, payload: String) -> Self {
        Self {
            kind: kind.into(),
            key: key.into(),
            payload,
        }
    }

    /// JSON body sent to the store; content sits under the `html` property.
    pub fn to_json(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        properties.insert(
            records::CONTENT_PROPERTY.to_string(),
            serde_json::Value::String(self.payload.clone()),
        );

        serde_json::json!({
            "kind": self.kind,
            "key": self.key,
            "properties": properties,
        })
    }
}

#[async_trait]
pub trait RecordStore {
    /// Persist a single record. Records are never batched.
    async fn put_record(&self, record: &Record) -> Result<()>;
}

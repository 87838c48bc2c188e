use async_trait::async_trait;

use crate::{
    config::{Config, Credentials},
    core::constants::records,
    core::error::{Result, UploaderError},
    store::{Record, RecordStore},
};

/// Record store reached over HTTP with basic authentication.
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpRecordStore {
    /// Build a client for `<scheme>://<host>:<port>` from the credentials.
    ///
    /// No request is sent until the first record is written.
    pub fn connect(credentials: &Credentials, config: &Config) -> Result<Self> {
        let base_url = format!(
            "{}://{}:{}",
            config.scheme(),
            credentials.host,
            credentials.port
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self) -> String {
        format!("{}{}", self.base_url, records::RECORDS_PATH)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn put_record(&self, record: &Record) -> Result<()> {
        let response = self
            .client
            .post(self.records_url())
            .basic_auth(&self.username, Some(&self.password))
            .json(&record.to_json())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = body.trim();
        Err(UploaderError::Upload(if detail.is_empty() {
            format!(
                "record '{}' rejected with status {}",
                record.key,
                status.as_u16()
            )
        } else {
            format!(
                "record '{}' rejected with status {}: {detail}",
                record.key,
                status.as_u16()
            )
        }))
    }
}

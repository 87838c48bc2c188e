//! Configuration management
//!
//! This module loads the credentials file and the optional TOML
//! settings file, and merges settings with CLI arguments.

pub mod credentials;

pub use credentials::{Credentials, load_credentials};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{config_files, records, schemes, timeouts};
use crate::core::error::{Result, UploaderError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scheme used to reach the record store (https, http)
    pub scheme: Option<String>,

    /// Timeout in seconds for each record request
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Kind under which records are stored
    pub record_kind: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: Some(schemes::DEFAULT.to_string()),
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            record_kind: Some(records::DEFAULT_KIND.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UploaderError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UploaderError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(config_files::FILE_NAME) {
            return config;
        }

        for i in 1..=config_files::MAX_PARENT_LEVELS {
            let path = format!("{}{}", "../".repeat(i), config_files::FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref scheme) = cli_config.scheme {
            self.scheme = Some(scheme.clone());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref record_kind) = cli_config.record_kind {
            self.record_kind = Some(record_kind.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(schemes::DEFAULT)
    }

    pub fn record_kind(&self) -> &str {
        self.record_kind.as_deref().unwrap_or(records::DEFAULT_KIND)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// User-Agent header, defaulting to `<crate>/<version>`
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(UploaderError::InvalidArgument(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(UploaderError::InvalidArgument(format!(
                    "Timeout of {timeout} seconds is larger than the maximum of {} seconds.",
                    timeouts::MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if let Some(ref scheme) = self.scheme
            && !schemes::ALL.contains(&scheme.as_str())
        {
            return Err(UploaderError::InvalidArgument(format!(
                "Invalid scheme '{scheme}'. Expected one of: {}.",
                schemes::ALL.join(", ")
            )));
        }

        if let Some(ref kind) = self.record_kind
            && kind.trim().is_empty()
        {
            return Err(UploaderError::InvalidArgument(
                "Record kind cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Store settings
    pub scheme: Option<String>,      // --scheme
    pub timeout: Option<u64>,        // --timeout
    pub user_agent: Option<String>,  // --user-agent
    pub record_kind: Option<String>, // --kind

    // Output & behavior
    pub quiet: bool,       // --quiet
    pub verbose: bool,     // --verbose
    pub no_progress: bool, // --no-progress
    pub dry_run: bool,     // --dry-run

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

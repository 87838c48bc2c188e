/// Application-wide constants.
///
/// Extension lists, record naming and defaults live here so the scanner,
/// the encoder and the store agree on them.
/// File selection constants
pub mod files {
    /// Suffixes of files eligible for upload (case-sensitive)
    pub const ELIGIBLE_EXTENSIONS: [&str; 7] =
        [".html", ".css", ".js", ".png", ".jpg", ".jpeg", ".gif"];

    /// Suffixes of eligible files uploaded as base64
    pub const BINARY_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];
}

/// Record store constants
pub mod records {
    /// Kind of every record written by the uploader
    pub const DEFAULT_KIND: &str = "DocModel";
    /// Property holding the file content
    pub const CONTENT_PROPERTY: &str = "html";
    /// Endpoint accepting new records
    pub const RECORDS_PATH: &str = "/records";
}

/// Credentials file keys
pub mod credentials {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const HOST: &str = "host";
    pub const PORT: &str = "port";
}

/// Connection schemes
pub mod schemes {
    pub const HTTPS: &str = "https";
    pub const HTTP: &str = "http";

    /// Default scheme
    pub const DEFAULT: &str = HTTPS;

    /// All valid schemes
    pub const ALL: [&str; 2] = [HTTPS, HTTP];
}

/// Timeout constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
}

/// Config file lookup
pub mod config_files {
    /// Name of the optional settings file
    pub const FILE_NAME: &str = ".uploader.toml";
    /// Parent directories searched above the current one
    pub const MAX_PARENT_LEVELS: usize = 3;
}

use std::fmt;

/// Error types for uploader operations
#[derive(Debug)]
pub enum UploaderError {
    /// IO error (resolving file locations, etc.)
    Io(std::io::Error),

    /// Credentials or configuration error
    Config(String),

    /// Root directory inaccessible or a discovered file vanished
    FileSystem(String),

    /// The record store rejected a record
    Upload(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// Setting value out of range (timeout, scheme, record kind)
    InvalidArgument(String),

    /// File walking error
    FileWalking(ignore::Error),
}

impl fmt::Display for UploaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploaderError::Io(err) => write!(f, "IO error: {err}"),
            UploaderError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UploaderError::FileSystem(msg) => write!(f, "File system error: {msg}"),
            UploaderError::Upload(msg) => write!(f, "Upload error: {msg}"),
            UploaderError::Http(err) => write!(f, "HTTP error: {err}"),
            UploaderError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            UploaderError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for UploaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploaderError::Io(err) => Some(err),
            UploaderError::Http(err) => Some(err),
            UploaderError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UploaderError {
    fn from(err: std::io::Error) -> Self {
        UploaderError::Io(err)
    }
}

impl From<reqwest::Error> for UploaderError {
    fn from(err: reqwest::Error) -> Self {
        UploaderError::Http(err)
    }
}

impl From<ignore::Error> for UploaderError {
    fn from(err: ignore::Error) -> Self {
        UploaderError::FileWalking(err)
    }
}

/// Type alias for Results using UploaderError
pub type Result<T> = std::result::Result<T, UploaderError>;

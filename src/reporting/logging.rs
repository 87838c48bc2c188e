use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info // Discovery and upload progress lines
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective store settings
pub fn log_config_info(config: &Config) {
    debug!(
        "Configuration: scheme={}, timeout={}s, kind={}",
        config.scheme(),
        config.timeout_duration().as_secs(),
        config.record_kind()
    );
    if let Some(ref user_agent) = config.user_agent {
        debug!("User-Agent: {user_agent}");
    }
}

/// Log a directory entered during discovery
pub fn log_dir_found(path: &Path) {
    info!("dir found: {}", path.display());
}

/// Log a file accepted during discovery
pub fn log_file_found(path: &Path) {
    info!("file found: {}", path.display());
}

/// Log discovery totals
pub fn log_discovery_complete(file_count: usize, binary_count: usize) {
    info!("Discovered {file_count} file(s) to upload ({binary_count} binary)");
}

/// Log upload start
pub fn log_upload_start(record_count: usize, endpoint: &str) {
    info!("Uploading {record_count} record(s) to {endpoint}");
}

/// Log a single record upload
pub fn log_uploading(relative_path: &str) {
    info!("uploading file: '{relative_path}'");
}

/// Log the size of an encoded payload for debugging
pub fn log_payload(key: &str, bytes: usize, binary: bool) {
    let encoding = if binary { "base64" } else { "text" };
    debug!("  {key}: {bytes} bytes ({encoding})");
}

/// Log upload completion
pub fn log_upload_complete(uploaded: usize, total: usize, duration_ms: u128) {
    if uploaded == total {
        info!("✅ Upload complete: {uploaded}/{total} records written ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Upload aborted: {uploaded}/{total} records written ({duration_ms}ms)"
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // Quiet takes precedence
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());

        let config = Config {
            scheme: Some("http".to_string()),
            timeout: Some(5),
            user_agent: Some("uploader-test".to_string()),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_discovery_lines() {
        log_dir_found(&PathBuf::from("/site"));
        log_dir_found(&PathBuf::from("/site/docs"));
        log_file_found(&PathBuf::from("/site/docs/index.html"));
        log_discovery_complete(0, 0);
        log_discovery_complete(12, 4);
    }

    #[test]
    fn test_log_upload_lines() {
        log_upload_start(2, "https://docs.example.com:443");
        log_uploading("/index.html");
        log_payload("index.html", 2, false);
        log_payload("img/pic.gif", 4, true);
        log_upload_complete(2, 2, 15);
        log_upload_complete(1, 2, 15);
        log_upload_complete(0, 0, 0);
    }

    #[test]
    fn test_log_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read file", Some(&io_error));
        log_error("Something went wrong", None);
    }

    #[test]
    fn test_log_functions_with_special_characters() {
        log_uploading("/docs/ünïcödé page.html");
        log_warning("Warning with emojis: ⚠️ 🔥");
        log_warning("");
    }
}

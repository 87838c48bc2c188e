use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::constants::credentials as keys;
use crate::core::error::{Result, UploaderError};

/// Connection details for the record store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read and parse a `key=value` credentials file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UploaderError::Config(format!(
                "can not load credentials file '{}': {e}",
                path.display()
            ))
        })?;

        Self::from_properties(&content)
    }

    /// Build credentials from properties-style text.
    ///
    /// `username`, `password`, `host` and `port` are required, in that order
    /// of checking; `port` must be an integer between 1 and 65535.
    pub fn from_properties(content: &str) -> Result<Self> {
        let properties = parse_properties(content);

        let username = required(&properties, keys::USERNAME)?;
        let password = required(&properties, keys::PASSWORD)?;
        let host = required(&properties, keys::HOST)?;
        let port_string = required(&properties, keys::PORT)?;

        let port = match port_string.trim().parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                return Err(UploaderError::Config(format!(
                    "error while parsing port '{port_string}', expected an integer between 1 and 65535"
                )));
            }
        };

        Ok(Self {
            host,
            port,
            username,
            password,
        })
    }
}

/// Load credentials from `path`.
pub fn load_credentials<P: AsRef<Path>>(path: P) -> Result<Credentials> {
    Credentials::load_from_file(path)
}

fn required(properties: &HashMap<String, String>, key: &str) -> Result<String> {
    properties.get(key).cloned().ok_or_else(|| {
        UploaderError::Config(format!(
            "No {key} found in credentials file, are you missing {key}=something"
        ))
    })
}

/// Parse `.properties`-style lines into a map.
///
/// Lines starting with `#` or `!` are comments. The key ends at the first
/// `=` or `:`; leading whitespace of the value is dropped. Later keys win.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = match line.find(['=', ':']) {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };

        properties.insert(key.trim().to_string(), value.trim_start().to_string());
    }

    properties
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn config_message(result: Result<Credentials>) -> String {
        match result {
            Err(UploaderError::Config(msg)) => msg,
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_properties__complete_file() -> TestResult {
        let credentials =
            Credentials::from_properties("username=a\npassword=b\nhost=h\nport=8080\n")?;

        assert_eq!(credentials.username, "a");
        assert_eq!(credentials.password, "b");
        assert_eq!(credentials.host, "h");
        assert_eq!(credentials.port, 8080);
        Ok(())
    }

    #[test]
    fn test_from_properties__missing_port() {
        let message = config_message(Credentials::from_properties(
            "username=a\npassword=b\nhost=h",
        ));

        assert_eq!(
            message,
            "No port found in credentials file, are you missing port=something"
        );
    }

    #[test]
    fn test_from_properties__missing_keys_checked_in_order() {
        let message = config_message(Credentials::from_properties("host=h\nport=1"));
        assert!(message.contains("No username found"));

        let message = config_message(Credentials::from_properties("username=a\nport=1"));
        assert!(message.contains("No password found"));

        let message = config_message(Credentials::from_properties("username=a\npassword=b"));
        assert!(message.contains("No host found"));
    }

    #[test]
    fn test_from_properties__non_integer_port() {
        let message = config_message(Credentials::from_properties(
            "username=a\npassword=b\nhost=h\nport=abc",
        ));

        assert!(message.contains("error while parsing port"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_from_properties__port_out_of_range() {
        for port in ["0", "65536", "-1", "99999999999"] {
            let content = format!("username=a\npassword=b\nhost=h\nport={port}");
            let message = config_message(Credentials::from_properties(&content));
            assert!(message.contains("error while parsing port"), "{port}");
        }
    }

    #[test]
    fn test_from_properties__comments_and_separators() -> TestResult {
        let content = "# uploader credentials\n\
                       ! legacy comment\n\
                       \n\
                       username = docs@example.com\n\
                       password: s3cr=t\n\
                       \thost=docs.example.com\n\
                       port = 443\n";

        let credentials = Credentials::from_properties(content)?;

        assert_eq!(credentials.username, "docs@example.com");
        // Only the first separator splits key and value
        assert_eq!(credentials.password, "s3cr=t");
        assert_eq!(credentials.host, "docs.example.com");
        assert_eq!(credentials.port, 443);
        Ok(())
    }

    #[test]
    fn test_from_properties__later_key_wins() -> TestResult {
        let credentials = Credentials::from_properties(
            "username=a\npassword=b\nhost=first\nhost=second\nport=1",
        )?;

        assert_eq!(credentials.host, "second");
        Ok(())
    }

    #[test]
    fn test_from_properties__windows_line_endings() -> TestResult {
        let credentials =
            Credentials::from_properties("username=a\r\npassword=b\r\nhost=h\r\nport=22\r\n")?;

        assert_eq!(credentials.password, "b");
        assert_eq!(credentials.port, 22);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"username=a\npassword=b\nhost=localhost\nport=9000\n")?;

        let credentials = load_credentials(file.path())?;

        assert_eq!(credentials.host, "localhost");
        assert_eq!(credentials.port, 9000);
        Ok(())
    }

    #[test]
    fn test_load_from_file__missing_file() {
        let message = config_message(load_credentials("/definitely/not/a/credentials/file"));

        assert!(message.contains("can not load credentials file"));
    }

    #[test]
    fn test_debug_hides_password() -> TestResult {
        let credentials =
            Credentials::from_properties("username=a\npassword=hunter2\nhost=h\nport=1")?;

        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
        Ok(())
    }

    #[test]
    fn test_parse_properties__key_without_value() {
        let properties = parse_properties("flag\nempty=\n");

        assert_eq!(properties.get("flag"), Some(&String::new()));
        assert_eq!(properties.get("empty"), Some(&String::new()));
    }
}

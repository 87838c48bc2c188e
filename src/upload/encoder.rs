use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    core::error::{Result, UploaderError},
    discovery::DiscoveredFile,
    reporting::logging,
    store::Record,
};

/// Read a discovered file and produce the record payload.
///
/// Binary files become standard padded base64; text files are decoded as
/// UTF-8 with invalid sequences replaced.
pub fn encode_payload(file: &DiscoveredFile) -> Result<String> {
    let bytes = std::fs::read(file.absolute_location()).map_err(|e| {
        UploaderError::FileSystem(format!(
            "can not read '{}': {e}",
            file.absolute_location().display()
        ))
    })?;

    if file.is_binary() {
        return Ok(STANDARD.encode(&bytes));
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            logging::log_warning(&format!(
                "'{}' is not valid UTF-8, invalid sequences were replaced",
                file.relative_path()
            ));
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Record key: the relative path without its leading separator.
pub fn record_key(relative_path: &str) -> &str {
    let mut chars = relative_path.chars();
    chars.next();
    chars.as_str()
}

/// Build the record for one discovered file.
pub fn record_for(file: &DiscoveredFile, kind: &str) -> Result<Record> {
    let payload = encode_payload(file)?;
    let key = record_key(file.relative_path());
    logging::log_payload(key, payload.len(), file.is_binary());
    Ok(Record::new(kind, key, payload))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use std::path::PathBuf;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn discovered(dir: &std::path::Path, name: &str) -> DiscoveredFile {
        DiscoveredFile::new(format!("/{name}"), dir.join(name))
    }

    #[test]
    fn test_encode_payload__text_is_kept_verbatim() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join("index.html"), "hi")?;

        let payload = encode_payload(&discovered(temp_dir.path(), "index.html"))?;

        assert_eq!(payload, "hi");
        Ok(())
    }

    #[test]
    fn test_encode_payload__binary_is_base64() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join("pic.gif"), [0xFF, 0xD8])?;

        let payload = encode_payload(&discovered(temp_dir.path(), "pic.gif"))?;

        assert_eq!(payload, "/9g=");
        Ok(())
    }

    #[test]
    fn test_encode_payload__uppercase_image_is_treated_as_text() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join("photo.JPG"), "not really a jpeg")?;

        let file = DiscoveredFile::new(
            "/photo.JPG".to_string(),
            temp_dir.path().join("photo.JPG"),
        );

        assert_eq!(encode_payload(&file)?, "not really a jpeg");
        Ok(())
    }

    #[test]
    fn test_encode_payload__invalid_utf8_is_replaced() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join("bad.js"), [b'a', 0xFF, b'b'])?;

        let payload = encode_payload(&discovered(temp_dir.path(), "bad.js"))?;

        assert_eq!(payload, "a\u{FFFD}b");
        Ok(())
    }

    #[test]
    fn test_encode_payload__vanished_file_is_file_system_error() {
        let file = DiscoveredFile::new(
            "/gone.html".to_string(),
            PathBuf::from("/definitely/not/here/gone.html"),
        );

        let result = encode_payload(&file);

        assert!(matches!(result, Err(UploaderError::FileSystem(_))));
    }

    #[test]
    fn test_record_key__strips_leading_separator() {
        assert_eq!(record_key("/index.html"), "index.html");
        assert_eq!(record_key("/img/pic.gif"), "img/pic.gif");
        assert_eq!(record_key(""), "");
    }

    #[test]
    fn test_record_for() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("css"))?;
        fs::write(temp_dir.path().join("css/site.css"), "body {}")?;

        let file = DiscoveredFile::new(
            "/css/site.css".to_string(),
            temp_dir.path().join("css/site.css"),
        );
        let record = record_for(&file, "DocModel")?;

        assert_eq!(record, Record::new("DocModel", "css/site.css", "body {}".to_string()));
        Ok(())
    }
}

use std::path::{MAIN_SEPARATOR, Path};

use crate::core::constants::files;

/// Whether a file name ends in one of the eligible suffixes.
///
/// Matching is case-sensitive: `photo.JPG` is not eligible.
pub fn is_eligible(file_name: &str) -> bool {
    files::ELIGIBLE_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}

/// Whether a file name or path must be uploaded as base64.
pub fn is_binary(file_name: &str) -> bool {
    files::BINARY_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}

/// Remove every occurrence of `root` from `path`.
///
/// This is a literal substring removal, not path relativization: if the root
/// string also appears inside a nested component it is removed there too.
pub fn strip_root(path: &str, root: &str) -> String {
    if root.is_empty() {
        return path.to_string();
    }
    path.replace(root, "")
}

/// Root string used for stripping, with trailing separators dropped so
/// that `site/` and `site` strip the same prefix.
pub fn normalize_root(root: &Path) -> String {
    let root = root.to_string_lossy();
    let trimmed = root.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() {
        // The filesystem root itself; every child path keeps its leading separator
        String::new()
    } else {
        trimmed.to_string()
    }
}

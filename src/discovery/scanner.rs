use ignore::WalkBuilder;

use crate::{
    core::error::{Result, UploaderError},
    discovery::path_utils::{is_binary, is_eligible, normalize_root, strip_root},
    reporting::logging,
};

use std::path::{Path, PathBuf};

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    relative_path: String,
    absolute_location: PathBuf,
    is_binary: bool,
}

impl DiscoveredFile {
    /// Binary classification uses the file name of `absolute_location`,
    /// never the root-stripped `relative_path`.
    pub fn new(relative_path: String, absolute_location: PathBuf) -> Self {
        let is_binary = absolute_location
            .file_name()
            .is_some_and(|name| is_binary(&name.to_string_lossy()));
        Self {
            relative_path,
            absolute_location,
            is_binary,
        }
    }

    /// Path relative to the scanned root, with its leading separator.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn absolute_location(&self) -> &Path {
        &self.absolute_location
    }

    pub fn is_binary(&self) -> bool {
        self.is_binary
    }
}

/// Recursive walk selecting eligible files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
}

impl DirectoryScanner {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root depth-first and return every eligible file.
    ///
    /// Entries are visited in the order the filesystem lists them. Locations
    /// are made absolute against the current directory so a relative root
    /// stays usable after the scan. Symlinks
    /// are followed; loops and unreadable subdirectories are logged as
    /// warnings and skipped so that their siblings are still visited.
    pub fn scan(&self) -> Result<Vec<DiscoveredFile>> {
        self.check_root()?;

        let root_prefix = normalize_root(&self.root);
        let mut discovered = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false).follow_links(true);

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth().unwrap_or(0) == 0 => {
                    return Err(UploaderError::from(err));
                }
                Err(err) => {
                    logging::log_warning(&format!("Skipping unreadable entry: {err}"));
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                logging::log_dir_found(entry.path());
            } else if file_type.is_file() {
                let file_name = entry.file_name().to_string_lossy();
                if !is_eligible(&file_name) {
                    continue;
                }

                let path = entry.path().to_string_lossy();
                let relative_path = strip_root(&path, &root_prefix);
                logging::log_file_found(entry.path());
                discovered.push(DiscoveredFile::new(
                    relative_path,
                    std::path::absolute(entry.path())?,
                ));
            }
        }

        Ok(discovered)
    }

    fn check_root(&self) -> Result<()> {
        match std::fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(UploaderError::FileSystem(format!(
                "'{}' is not a directory",
                self.root.display()
            ))),
            Err(err) => Err(UploaderError::FileSystem(format!(
                "can not access files directory '{}': {err}",
                self.root.display()
            ))),
        }
    }
}

/// Scan `root` with a fresh [`DirectoryScanner`].
pub fn scan<P: AsRef<Path>>(root: P) -> Result<Vec<DiscoveredFile>> {
    DirectoryScanner::new(root.as_ref()).scan()
}

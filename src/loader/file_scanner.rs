//! File scanning utilities for discovering configuration documents

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ConfigError;

/// Extensions accepted for every document kind
pub const CONFIG_EXTENSIONS: [&str; 3] = ["hjson", "json5", "json"];

pub struct FileScanner;

impl FileScanner {
    /// Check if a file has a configuration document extension
    pub fn is_config_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| CONFIG_EXTENSIONS.contains(&ext))
            .unwrap_or(false)
    }

    /// Recursively collect configuration documents under `dir`, in path order.
    ///
    /// A missing directory yields no files.
    pub fn scan_directory_recursive(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();

        if !dir.is_dir() {
            return Ok(files);
        }

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                ConfigError::io(&path, e.into())
            })?;
            let path = entry.path();

            if entry.file_type().is_file() && Self::is_config_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Find the single document named `<stem>.<ext>` directly inside `dir`.
    ///
    /// Extensions are tried in [`CONFIG_EXTENSIONS`] order; the first hit wins.
    pub fn find_single(dir: &Path, stem: &str) -> Option<PathBuf> {
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|path| path.is_file())
    }
}

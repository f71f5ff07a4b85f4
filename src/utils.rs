//! Utility helpers

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Utils;

impl Utils {
    /// Remove all quote characters from a field
    pub fn strip_quotes(field: &str) -> String {
        field.chars().filter(|&c| c != '\'' && c != '"').collect()
    }

    pub fn date_time_filename(prefix: &str, postfix: &str) -> String {
        let now = chrono::Local::now();
        format!("{}{}{}", prefix, now.format("%Y%m%d_%H%M%S"), postfix)
    }

    pub fn shorten(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            text.chars().take(max_chars).collect()
        }
    }
}

/// Self-deleting scratch folder for tests and transient output
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let mut path = env::temp_dir();
        let unique = format!(
            "blockmesh_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        );
        path.push(unique);
        fs::create_dir_all(&path)
            .map_err(|e| Error::FileSave(format!("Failed to create temp dir: {}", e)))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        if let Ok(entries) = fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() {
                    let _ = fs::remove_file(path);
                }
            }
        }
        let _ = fs::remove_dir(&self.path);
    }
}

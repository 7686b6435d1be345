use std::fs;
use std::path::PathBuf;

use crate::error::{GatherError, Result};

/// A file selected during traversal of the source directory
#[derive(Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Path used to open the file
    pub path: PathBuf,
    /// Path relative to the source directory, written in the entry header
    pub relative_path: PathBuf,
}

/// Header path and full text of one selected file.
///
/// Only lives while its entry is being written.
#[derive(Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub relative_path: String,
    pub contents: String,
}

impl FileRecord {
    /// Read a selected file as UTF-8 text
    pub fn read(file: &SourceFile) -> Result<Self> {
        let relative_path = file
            .relative_path
            .to_str()
            .ok_or_else(|| {
                GatherError::Collector(format!(
                    "Path is not valid Unicode: {}",
                    file.relative_path.display()
                ))
            })?
            .to_string();

        let contents = fs::read_to_string(&file.path).map_err(|e| {
            GatherError::Collector(format!("Cannot read '{}': {}", file.path.display(), e))
        })?;

        Ok(Self {
            relative_path,
            contents,
        })
    }
}

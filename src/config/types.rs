use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Codegather configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory that is searched recursively
    pub source_dir: PathBuf,

    /// File that receives the concatenated entries
    pub output_file: PathBuf,

    /// File name endings that qualify a file for inclusion (case-sensitive)
    pub suffixes: Vec<String>,

    /// Visit directory contents in file name order instead of filesystem order
    pub sort_entries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/gpu"),
            output_file: PathBuf::from("gpu_code.txt"),
            suffixes: vec![".rs".to_string(), ".wgsl".to_string()],
            sort_entries: true,
        }
    }
}

impl Config {
    /// Whether a file name ends with one of the recognized suffixes
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

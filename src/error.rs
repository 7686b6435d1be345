use thiserror::Error;

/// Codegather error types
#[derive(Error, Debug)]
pub enum GatherError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Collector error: {0}")]
    Collector(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for codegather operations
pub type Result<T> = std::result::Result<T, GatherError>;

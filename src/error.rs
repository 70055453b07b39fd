use std::path::PathBuf;
use thiserror::Error;

/// Failure of a disk-space query
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("path does not resolve to a mounted volume: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("disk space query failed for {}: {source}", path.display())]
    SystemCallFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{quantity} does not fit the target integer width: {value}")]
    Overflow { quantity: &'static str, value: u64 },
}

impl ProbeError {
    /// Status code reported across the C ABI
    pub fn status_code(&self) -> i32 {
        match self {
            ProbeError::PathNotFound { .. } => 1,
            ProbeError::SystemCallFailed { .. } => 2,
            ProbeError::Overflow { .. } => 3,
        }
    }
}

/// Configuration and I/O errors outside the probe itself
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

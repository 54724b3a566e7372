use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the recipe model, the catalogue and its persistence boundary.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// Malformed input to a core operation. Never silently corrected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} is out of range for {len} entries")]
    OutOfRange { index: i64, len: usize },

    /// Persisted state is absent. Callers loading a catalogue treat this as "start empty".
    #[error("No persisted catalogue found at '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("I/O failure on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Unsupported catalogue schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CatalogueError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogueError>;

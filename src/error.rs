//! Error types for the domdiff document comparison system.

use std::path::PathBuf;
use thiserror::Error;

/// Tree construction errors
#[derive(Debug, Error)]
pub enum TreeError {
    /// The parsed document has no element to anchor the tree on.
    #[error("No <{tag}> tag found in the document")]
    NoRootElement { tag: String },
}

/// Top-level errors surfaced by the driver and the CLI
#[derive(Debug, Error)]
pub enum DomDiffError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for DomDiffError {
    fn from(err: config::ConfigError) -> Self {
        DomDiffError::Config(err.to_string())
    }
}

impl DomDiffError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DomDiffError::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error types for the file and stream glue around the trie.
//!
//! Trie operations themselves never fail; absence is reported through
//! `bool`, zero counts and empty results.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or saving a trie.
#[derive(Error, Debug)]
pub enum Error {
    /// Opening, reading or writing a named file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("Stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// Binary snapshot encoding or decoding failed.
    #[error("Postcard serialization error: {0}")]
    Postcard(#[from] postcard::Error),

    /// JSON snapshot encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot decoded but its content is unusable.
    #[error("Invalid snapshot format: {0}")]
    InvalidSnapshot(String),
}

impl Error {
    /// Create a file I/O error for `path`
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid snapshot error
    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        Error::InvalidSnapshot(msg.into())
    }

    /// Attaches `path` to a stream error, turning it into [`Error::Io`].
    /// Other variants are returned unchanged.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Error::Stream(source) => Error::io(path, source),
            other => other,
        }
    }
}

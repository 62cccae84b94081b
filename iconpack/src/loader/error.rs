//! Error types for icon source loaders.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading icons from a source.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The local icon directory does not exist.
    #[error("icon directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory exists but no icon file matched.
    #[error("no icons found in {}", .0.display())]
    NoIcons(PathBuf),

    /// An icon file could not be interpreted.
    #[error("invalid icon {}: {reason}", path.display())]
    InvalidIcon { path: PathBuf, reason: String },

    /// A requested registry collection is not installed or not served.
    #[error("icon collection '{prefix}' not found")]
    CollectionNotFound { prefix: String },

    /// Registry data could not be parsed.
    #[error("failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The selection cannot be served by this source.
    #[error("unsupported selection for '{prefix}': {reason}")]
    UnsupportedSelection { prefix: String, reason: String },

    /// Invalid glob pattern.
    #[error("invalid icon pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// I/O error while reading a source.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoaderError {
    /// Check if the error means the source is simply absent.
    ///
    /// An absent local directory is an expected configuration; every other
    /// error points at a source that exists but is broken.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, LoaderError::DirectoryNotFound(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoaderError::Io {
            path: path.into(),
            source,
        }
    }
}

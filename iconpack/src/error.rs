//! Pipeline error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::loader::LoaderError;

/// Result type for pipeline operations.
pub type IconpackResult<T> = Result<T, IconpackError>;

/// Errors that abort icon aggregation or module generation.
///
/// Local directory failures and unreadable declaration files never show up
/// here: they are recoverable and handled where they occur.
#[derive(Debug, Error)]
pub enum IconpackError {
    /// The icon registry could not be loaded.
    #[error("failed to load icon registry: {0}")]
    Registry(#[source] LoaderError),

    /// The type declaration could not be written.
    #[error("failed to write {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The virtual module body could not be serialized.
    #[error("failed to serialize virtual module: {0}")]
    Serialize(#[from] serde_json::Error),
}

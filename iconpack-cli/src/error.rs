//! CLI error types.

use std::path::PathBuf;

use iconpack::config::ConfigError;
use iconpack::IconpackError;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Icon aggregation or declaration output failed.
    #[error("{0}")]
    Pipeline(#[from] IconpackError),

    /// The declaration file does not match the current icon set.
    #[error("Icon declarations are out of date: {} (run `iconpack build`)", path.display())]
    Stale { path: PathBuf },

    /// The provider did not serve the virtual module.
    #[error("Virtual module {0} was not served")]
    ModuleUnavailable(String),

    /// Failed to create the Tokio runtime.
    #[error("Failed to create Tokio runtime: {0}")]
    RuntimeCreation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_display_names_file() {
        let err = CliError::Stale {
            path: PathBuf::from(".iconpack/icons.d.ts"),
        };
        let message = err.to_string();
        assert!(message.contains(".iconpack/icons.d.ts"));
        assert!(message.contains("iconpack build"));
    }

    #[test]
    fn test_runtime_creation_display() {
        let err = CliError::RuntimeCreation("no threads".to_string());
        assert_eq!(err.to_string(), "Failed to create Tokio runtime: no threads");
    }
}

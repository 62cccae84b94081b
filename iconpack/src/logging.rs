//! Log subscriber setup for binaries embedding iconpack.
//!
//! The library only emits `tracing` events. A binary calls [`init_logging`]
//! once at startup to print them; `RUST_LOG` overrides the default filter.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter targets enabled by default.
pub const LOG_TARGETS: &[&str] = &["iconpack", "iconpack_cli"];

/// A global subscriber could not be installed.
#[derive(Debug, Error)]
#[error("failed to initialize logging: {0}")]
pub struct LoggingError(String);

/// Default filter directives: `info` for iconpack targets, `debug` when verbose.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install a formatted stderr subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "iconpack=info,iconpack_cli=info");
        assert_eq!(default_directives(true), "iconpack=debug,iconpack_cli=debug");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(false);
        assert!(init_logging(false).is_err());
    }
}

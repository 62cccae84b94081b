//! CLI command implementations.

pub mod build;
pub mod check;
pub mod fingerprint;
pub mod module;

use std::path::Path;

use iconpack::config::DEFAULT_CONFIG_FILE;
use iconpack::{ConfigFile, IntegrationConfig};

use crate::error::CliError;

/// Resolve the integration config for a project.
///
/// An explicit `--config` path must exist. Without one, `iconpack.ini` under
/// the root is used when present, otherwise defaults apply.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<IntegrationConfig, CliError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "Loading config");
        return Ok(ConfigFile::load(path)?.to_integration_config(root));
    }

    let path = root.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "Loading config");
        Ok(ConfigFile::load(&path)?.to_integration_config(root))
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        Ok(IntegrationConfig::new(root))
    }
}

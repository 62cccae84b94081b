//! INI configuration file.
//!
//! ```ini
//! [icons]
//! dir = src/icons
//! pattern = **/*.svg
//! artifact = .iconpack/icons.d.ts
//! default_pack = local
//!
//! [registry]
//! backend = packaged
//! url = https://api.iconify.design
//! timeout_secs = 30
//!
//! [include]
//! mdi = home, account
//! simple-icons = *
//! ```
//!
//! Every key is optional. Collections under `[include]` keep file order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

use super::{IconSelection, IncludeConfig, IntegrationConfig, RegistryKind, RegistrySettings};

/// Default config file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "iconpack.ini";

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or parsed.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// Inline config text could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] ini::ParseError),

    /// A key holds a value that cannot be used.
    #[error("invalid value '{value}' for [{section}] {key}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Settings loaded from an INI file.
///
/// Unset keys stay `None` and fall back to [`IntegrationConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub icon_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub artifact: Option<PathBuf>,
    pub default_pack: Option<String>,
    pub registry: RegistrySettings,
    pub include: IncludeConfig,
}

impl ConfigFile {
    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini(&ini)
    }

    /// Parse config text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = ConfigFile::default();

        if let Some(icons) = ini.section(Some("icons")) {
            config.icon_dir = non_empty(icons.get("dir")).map(PathBuf::from);
            config.pattern = non_empty(icons.get("pattern")).map(str::to_string);
            config.artifact = non_empty(icons.get("artifact")).map(PathBuf::from);
            config.default_pack = non_empty(icons.get("default_pack")).map(str::to_string);
        }

        if let Some(registry) = ini.section(Some("registry")) {
            if let Some(value) = non_empty(registry.get("backend")) {
                config.registry.kind = RegistryKind::from_config_str(value).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        section: "registry".to_string(),
                        key: "backend".to_string(),
                        value: value.to_string(),
                        reason: "expected 'packaged' or 'http'".to_string(),
                    }
                })?;
            }
            if let Some(value) = non_empty(registry.get("url")) {
                config.registry.url = value.trim_end_matches('/').to_string();
            }
            if let Some(value) = non_empty(registry.get("timeout_secs")) {
                let secs = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    section: "registry".to_string(),
                    key: "timeout_secs".to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                config.registry.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(include) = ini.section(Some("include")) {
            for (prefix, value) in include.iter() {
                let selection = IconSelection::parse_list(value);
                if selection.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        section: "include".to_string(),
                        key: prefix.to_string(),
                        value: value.to_string(),
                        reason: "expected icon names or '*'".to_string(),
                    });
                }
                config.include.insert(prefix.trim(), selection);
            }
        }

        Ok(config)
    }

    /// Build an integration config for the given project root.
    pub fn to_integration_config(&self, root: impl Into<PathBuf>) -> IntegrationConfig {
        let mut config = IntegrationConfig::new(root).with_registry(self.registry.clone());
        config.include = self.include.clone();

        if let Some(dir) = &self.icon_dir {
            config = config.with_icon_dir(dir.clone());
        }
        if let Some(pattern) = &self.pattern {
            config = config.with_icon_pattern(pattern.clone());
        }
        if let Some(artifact) = &self.artifact {
            config = config.with_artifact_path(artifact.clone());
        }
        if let Some(pack) = &self.default_pack {
            config = config.with_default_pack(pack.clone());
        }

        config
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

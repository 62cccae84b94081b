//! Integration configuration.
//!
//! [`IntegrationConfig`] describes which registry collections to include, where
//! the local icon directory lives and where the generated declaration goes.
//! It is built in code with the `with_*` methods or loaded from an INI file
//! through [`ConfigFile`].

mod file;
mod include;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use file::{ConfigError, ConfigFile, DEFAULT_CONFIG_FILE};
pub use include::{IconSelection, IncludeConfig, WILDCARD};

use crate::collection::LOCAL_PREFIX;

/// Default local icon directory, relative to the project root.
pub const DEFAULT_ICON_DIR: &str = "src/icons";

/// Default glob for local icon files, relative to the icon directory.
pub const DEFAULT_ICON_PATTERN: &str = "**/*.svg";

/// Default location of the generated declaration, relative to the project root.
pub const DEFAULT_ARTIFACT_PATH: &str = ".iconpack/icons.d.ts";

/// Default Iconify API endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://api.iconify.design";

/// Default HTTP timeout for registry requests (in seconds).
pub const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 30;

/// Processing options for the local icon directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOptions {
    /// Glob pattern matched below the icon directory.
    pub pattern: String,
}

impl Default for LocalOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_ICON_PATTERN.to_string(),
        }
    }
}

/// Which registry implementation serves the `include` collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryKind {
    /// Iconify JSON packages installed under `node_modules`.
    #[default]
    Packaged,
    /// The Iconify HTTP API.
    Http,
}

impl RegistryKind {
    /// Parse from a config file value.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "packaged" | "package" | "node_modules" => Some(RegistryKind::Packaged),
            "http" | "api" => Some(RegistryKind::Http),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryKind::Packaged => write!(f, "packaged"),
            RegistryKind::Http => write!(f, "http"),
        }
    }
}

/// Registry backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    pub kind: RegistryKind,

    /// Base URL for the HTTP backend.
    pub url: String,

    /// Request timeout for the HTTP backend.
    pub timeout: Duration,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            kind: RegistryKind::default(),
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REGISTRY_TIMEOUT_SECS),
        }
    }
}

/// Configuration for one integration instance.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationConfig {
    /// Project root; relative paths below are resolved against it.
    pub root: PathBuf,

    /// Registry collections to include.
    pub include: IncludeConfig,

    /// Local icon directory.
    pub icon_dir: PathBuf,

    /// Local icon processing options.
    pub local: LocalOptions,

    /// Generated declaration file.
    pub artifact_path: PathBuf,

    /// Collection whose icons are referenced without a prefix.
    pub default_pack: String,

    /// Registry backend settings.
    pub registry: RegistrySettings,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include: IncludeConfig::default(),
            icon_dir: PathBuf::from(DEFAULT_ICON_DIR),
            local: LocalOptions::default(),
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            default_pack: LOCAL_PREFIX.to_string(),
            registry: RegistrySettings::default(),
        }
    }
}

impl IntegrationConfig {
    /// Create a configuration for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Include a registry collection.
    pub fn with_include(mut self, prefix: impl Into<String>, selection: IconSelection) -> Self {
        self.include.insert(prefix, selection);
        self
    }

    /// Set the local icon directory.
    pub fn with_icon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icon_dir = dir.into();
        self
    }

    /// Set the local icon glob pattern.
    pub fn with_icon_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.local.pattern = pattern.into();
        self
    }

    /// Set the generated declaration path.
    pub fn with_artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact_path = path.into();
        self
    }

    /// Set the unprefixed collection.
    pub fn with_default_pack(mut self, prefix: impl Into<String>) -> Self {
        self.default_pack = prefix.into();
        self
    }

    /// Set the registry backend settings.
    pub fn with_registry(mut self, registry: RegistrySettings) -> Self {
        self.registry = registry;
        self
    }

    /// Local icon directory resolved against the root.
    pub fn icon_dir_path(&self) -> PathBuf {
        resolve(&self.root, &self.icon_dir)
    }

    /// Declaration path resolved against the root.
    pub fn artifact_file(&self) -> PathBuf {
        resolve(&self.root, &self.artifact_path)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntegrationConfig::default();
        assert!(config.include.is_empty());
        assert_eq!(config.icon_dir, PathBuf::from("src/icons"));
        assert_eq!(config.local.pattern, "**/*.svg");
        assert_eq!(config.default_pack, "local");
        assert_eq!(config.registry.kind, RegistryKind::Packaged);
    }

    #[test]
    fn test_builder_pattern() {
        let config = IntegrationConfig::new("/project")
            .with_include("mdi", IconSelection::names(["home", "account"]))
            .with_include("fa", IconSelection::all())
            .with_icon_dir("assets/icons")
            .with_icon_pattern("*.svg")
            .with_artifact_path("types/icons.d.ts")
            .with_default_pack("brand");

        assert_eq!(config.include.len(), 2);
        assert_eq!(config.icon_dir_path(), PathBuf::from("/project/assets/icons"));
        assert_eq!(config.artifact_file(), PathBuf::from("/project/types/icons.d.ts"));
        assert_eq!(config.local.pattern, "*.svg");
        assert_eq!(config.default_pack, "brand");
    }

    #[test]
    fn test_absolute_paths_are_not_joined() {
        let config = IntegrationConfig::new("/project").with_icon_dir("/shared/icons");
        assert_eq!(config.icon_dir_path(), PathBuf::from("/shared/icons"));
    }

    #[test]
    fn test_registry_kind_from_config_str() {
        assert_eq!(RegistryKind::from_config_str("packaged"), Some(RegistryKind::Packaged));
        assert_eq!(RegistryKind::from_config_str(" HTTP "), Some(RegistryKind::Http));
        assert_eq!(RegistryKind::from_config_str("ftp"), None);
    }
}

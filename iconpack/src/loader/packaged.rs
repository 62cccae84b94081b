//! Registry backed by Iconify JSON packages installed in `node_modules`.
//!
//! Two package layouts are supported:
//!
//! ```text
//! node_modules/
//! ├── @iconify-json/
//! │   ├── mdi/icons.json          per-collection packages
//! │   └── simple-icons/icons.json
//! └── @iconify/json/json/
//!     ├── mdi.json                full icon set package
//!     └── ...
//! ```
//!
//! Per-collection packages are preferred. Every installed `@iconify-json/*`
//! package is included whole unless `include` names it explicitly.

use std::io;
use std::path::{Path, PathBuf};

use super::{select_icons, LoaderError, RegistryRequest, RegistrySource};
use crate::collection::{CollectionMap, IconCollection};
use crate::config::IconSelection;

/// Default package directory, relative to the project root.
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

const COLLECTION_PACKAGES_DIR: &str = "@iconify-json";
const COLLECTION_PACKAGE_FILE: &str = "icons.json";
const FULL_SET_DIR: &str = "@iconify/json/json";

/// Loads registry collections from installed Iconify JSON packages.
#[derive(Debug, Clone)]
pub struct PackagedRegistry {
    modules_dir: PathBuf,
}

impl Default for PackagedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PackagedRegistry {
    /// Create a registry reading from `<root>/node_modules`.
    pub fn new() -> Self {
        Self {
            modules_dir: PathBuf::from(DEFAULT_MODULES_DIR),
        }
    }

    /// Use a different package directory (relative to the root, or absolute).
    pub fn with_modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = dir.into();
        self
    }

    /// Prefixes of installed per-collection packages, sorted by name.
    pub async fn installed_collections(&self, root: &Path) -> Result<Vec<String>, LoaderError> {
        let dir = root.join(&self.modules_dir).join(COLLECTION_PACKAGES_DIR);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LoaderError::io(&dir, e)),
        };

        let mut prefixes = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LoaderError::io(&dir, e))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            if entry.path().join(COLLECTION_PACKAGE_FILE).is_file() {
                prefixes.push(name);
            }
        }

        prefixes.sort();
        Ok(prefixes)
    }

    /// Read one full collection.
    async fn read_collection(
        &self,
        root: &Path,
        prefix: &str,
    ) -> Result<IconCollection, LoaderError> {
        let modules = root.join(&self.modules_dir);
        let candidates = [
            modules
                .join(COLLECTION_PACKAGES_DIR)
                .join(prefix)
                .join(COLLECTION_PACKAGE_FILE),
            modules.join(FULL_SET_DIR).join(format!("{}.json", prefix)),
        ];

        for path in &candidates {
            let bytes = match tokio::fs::read(path).await {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(LoaderError::io(path, e)),
            };

            tracing::debug!(prefix, path = %path.display(), "Reading icon collection");

            return serde_json::from_slice(&bytes).map_err(|e| LoaderError::Parse {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            });
        }

        Err(LoaderError::CollectionNotFound {
            prefix: prefix.to_string(),
        })
    }
}

impl RegistrySource for PackagedRegistry {
    async fn load(&self, request: RegistryRequest<'_>) -> Result<CollectionMap, LoaderError> {
        let mut plan: Vec<(String, IconSelection)> = request
            .include
            .iter()
            .map(|(prefix, selection)| (prefix.to_string(), selection.clone()))
            .collect();

        for prefix in self.installed_collections(request.root).await? {
            if !request.include.contains(&prefix) {
                plan.push((prefix, IconSelection::all()));
            }
        }

        let mut map = CollectionMap::new();
        for (prefix, selection) in plan {
            let collection = self.read_collection(request.root, &prefix).await?;
            match select_icons(&collection, &selection) {
                Some(selected) => {
                    map.insert_as(prefix, selected);
                }
                None => {
                    tracing::warn!(
                        prefix = %prefix,
                        "No requested icons found, skipping collection"
                    );
                }
            }
        }

        Ok(map)
    }

    fn name(&self) -> &str {
        "packaged"
    }
}

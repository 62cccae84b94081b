//! Collection aggregation.
//!
//! The registry seeds the collection map; the local directory is layered on
//! top under the reserved [`LOCAL_PREFIX`], replacing any registry collection
//! of the same name. A registry failure aborts aggregation, a local failure
//! only means the local icons are absent.

use crate::artifact::ArtifactCache;
use crate::collection::{CollectionMap, LOCAL_PREFIX};
use crate::config::IntegrationConfig;
use crate::error::{IconpackError, IconpackResult};
use crate::loader::{
    LocalDirectorySource, LocalRequest, LocalSource, RegistryBackend, RegistryRequest,
    RegistrySource,
};

/// Merges registry and local icons into one [`CollectionMap`].
#[derive(Debug, Clone)]
pub struct Aggregator<R, L> {
    registry: R,
    local: L,
}

impl Aggregator<RegistryBackend, LocalDirectorySource> {
    /// Create the production aggregator for a configuration.
    pub fn from_config(config: &IntegrationConfig) -> IconpackResult<Self> {
        let registry =
            RegistryBackend::from_settings(&config.registry).map_err(IconpackError::Registry)?;
        Ok(Self::new(registry, LocalDirectorySource))
    }
}

impl<R: RegistrySource, L: LocalSource> Aggregator<R, L> {
    pub fn new(registry: R, local: L) -> Self {
        Self { registry, local }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Load the registry collections.
    ///
    /// This is the expensive, fatal half of aggregation; callers may cache it.
    pub async fn load_registry(
        &self,
        config: &IntegrationConfig,
    ) -> IconpackResult<CollectionMap> {
        let request = RegistryRequest {
            root: &config.root,
            include: &config.include,
        };

        let map = self
            .registry
            .load(request)
            .await
            .map_err(IconpackError::Registry)?;

        tracing::debug!(
            source = self.registry.name(),
            collections = map.len(),
            "Registry collections loaded"
        );

        Ok(map)
    }

    /// Layer the local collection on top of `map`.
    ///
    /// Local failures are logged and leave `map` without local icons.
    pub async fn layer_local(
        &self,
        mut map: CollectionMap,
        config: &IntegrationConfig,
    ) -> CollectionMap {
        let directory = config.icon_dir_path();
        let request = LocalRequest {
            directory: &directory,
            options: &config.local,
        };

        match self.local.load(request).await {
            Ok(collection) => {
                let count = collection.icon_count();
                if map.insert_as(LOCAL_PREFIX, collection).is_some() {
                    tracing::debug!(
                        prefix = LOCAL_PREFIX,
                        "Local icons replace registry collection"
                    );
                }
                tracing::debug!(
                    dir = %directory.display(),
                    icons = count,
                    "Local icons loaded"
                );
            }
            Err(e) if e.is_missing_source() => {
                tracing::debug!(dir = %directory.display(), "No local icon directory");
            }
            Err(e) => {
                tracing::warn!(
                    dir = %directory.display(),
                    error = %e,
                    "Skipping local icons"
                );
            }
        }

        if map.total_icons() == 0 {
            tracing::warn!("No icons detected");
        } else {
            let prefixes: Vec<&str> = map.prefixes().collect();
            tracing::info!(
                prefixes = %prefixes.join(", "),
                icons = map.total_icons(),
                "Loaded icons"
            );
        }

        map
    }

    /// Load and merge all sources without touching the declaration file.
    pub async fn collect(&self, config: &IntegrationConfig) -> IconpackResult<CollectionMap> {
        let registry = self.load_registry(config).await?;
        Ok(self.layer_local(registry, config).await)
    }

    /// Load all sources and bring the declaration file up to date.
    pub async fn aggregate(&self, config: &IntegrationConfig) -> IconpackResult<CollectionMap> {
        let map = self.collect(config).await?;
        ArtifactCache::from_config(config)
            .reconcile(map.collections())
            .await?;
        Ok(map)
    }
}

//! Virtual module served to the host build tool.
//!
//! Application code imports `virtual:iconpack`; the host asks the plugin to
//! resolve that id, then to load the resolved id. The loaded body exports the
//! aggregated collection map as the default export and the `include`
//! configuration as `config`:
//!
//! ```text
//! export default {"mdi":{"prefix":"mdi","icons":{...}},"local":{...}};
//! export const config = {"include":{"mdi":["home","account"]}}
//! ```

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

use crate::aggregate::Aggregator;
use crate::artifact::ArtifactCache;
use crate::collection::CollectionMap;
use crate::config::{IncludeConfig, IntegrationConfig};
use crate::error::IconpackResult;
use crate::loader::{LocalDirectorySource, LocalSource, RegistryBackend, RegistrySource};
use crate::session::SessionCache;

/// Module id imported by application code.
pub const VIRTUAL_MODULE_ID: &str = "virtual:iconpack";

/// Internal id the virtual module resolves to.
///
/// The leading NUL keeps other plugins from treating it as a file path.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:iconpack";

/// Plugin name reported to the host.
pub const PLUGIN_NAME: &str = "iconpack";

/// Contract between a build tool host and a plugin.
pub trait BuildPlugin: Send + Sync {
    /// Plugin name for host diagnostics.
    fn name(&self) -> &str;

    /// Claim a module id, returning the id to load it under.
    ///
    /// `None` leaves the id to other plugins.
    fn resolve_id(&self, id: &str) -> Option<String>;

    /// Produce the source of a resolved module id.
    ///
    /// `Ok(None)` means the id is not handled by this plugin.
    fn load(&self, id: &str) -> impl Future<Output = IconpackResult<Option<String>>> + Send;
}

/// Serves the aggregated icon set as `virtual:iconpack`.
///
/// The registry is loaded once per provider and cached. The local directory is
/// re-read on every load and layered on a copy of the cached registry map, so
/// icons added during a session show up on the next load.
#[derive(Debug)]
pub struct VirtualModuleProvider<R, L> {
    config: IntegrationConfig,
    aggregator: Aggregator<R, L>,
    artifacts: ArtifactCache,
    session: SessionCache<CollectionMap>,
}

impl VirtualModuleProvider<RegistryBackend, LocalDirectorySource> {
    /// Create the production provider for a configuration.
    pub fn from_config(config: IntegrationConfig) -> IconpackResult<Self> {
        let aggregator = Aggregator::from_config(&config)?;
        Ok(Self::new(config, aggregator))
    }
}

impl<R: RegistrySource, L: LocalSource> VirtualModuleProvider<R, L> {
    pub fn new(config: IntegrationConfig, aggregator: Aggregator<R, L>) -> Self {
        let artifacts = ArtifactCache::from_config(&config);
        Self {
            config,
            aggregator,
            artifacts,
            session: SessionCache::new(),
        }
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    pub fn artifacts(&self) -> &ArtifactCache {
        &self.artifacts
    }

    /// The session's registry map, loading it on first use.
    pub async fn registry_collections(&self) -> IconpackResult<Arc<CollectionMap>> {
        self.session
            .get_or_populate(|| self.aggregator.load_registry(&self.config))
            .await
    }

    /// The cached registry map with the current local icons layered on top.
    pub async fn collections(&self) -> IconpackResult<CollectionMap> {
        let registry = self.registry_collections().await?;
        Ok(self
            .aggregator
            .layer_local(CollectionMap::clone(&registry), &self.config)
            .await)
    }

    /// Discard the cached registry map.
    pub fn invalidate(&mut self) {
        if self.session.evict().is_some() {
            tracing::debug!("Icon session cache cleared");
        }
    }

    async fn load_module(&self) -> IconpackResult<String> {
        let collections = self.collections().await?;
        self.artifacts.reconcile(collections.collections()).await?;
        render_module(&collections, &self.config.include)
    }
}

impl<R: RegistrySource, L: LocalSource> BuildPlugin for VirtualModuleProvider<R, L> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        (id == VIRTUAL_MODULE_ID).then(|| RESOLVED_VIRTUAL_MODULE_ID.to_string())
    }

    async fn load(&self, id: &str) -> IconpackResult<Option<String>> {
        if id != RESOLVED_VIRTUAL_MODULE_ID {
            return Ok(None);
        }
        self.load_module().await.map(Some)
    }
}

#[derive(Serialize)]
struct ModuleConfig<'a> {
    include: &'a IncludeConfig,
}

/// Render the virtual module body.
pub fn render_module(
    collections: &CollectionMap,
    include: &IncludeConfig,
) -> IconpackResult<String> {
    let default_export = serde_json::to_string(collections)?;
    let config_export = serde_json::to_string(&ModuleConfig { include })?;
    Ok(format!(
        "export default {};\nexport const config = {}",
        default_export, config_export
    ))
}

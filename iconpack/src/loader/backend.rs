//! Registry backend selected at runtime from configuration.

use super::{
    HttpRegistry, LoaderError, PackagedRegistry, RegistryRequest, RegistrySource, ReqwestClient,
};
use crate::collection::CollectionMap;
use crate::config::{RegistryKind, RegistrySettings};

/// A registry source chosen from [`RegistrySettings`].
#[derive(Debug, Clone)]
pub enum RegistryBackend {
    Packaged(PackagedRegistry),
    Http(HttpRegistry<ReqwestClient>),
}

impl RegistryBackend {
    /// Build the backend described by the settings.
    pub fn from_settings(settings: &RegistrySettings) -> Result<Self, LoaderError> {
        match settings.kind {
            RegistryKind::Packaged => Ok(RegistryBackend::Packaged(PackagedRegistry::new())),
            RegistryKind::Http => {
                let client = ReqwestClient::with_timeout(settings.timeout)?;
                Ok(RegistryBackend::Http(HttpRegistry::with_base_url(
                    client,
                    settings.url.clone(),
                )))
            }
        }
    }
}

impl RegistrySource for RegistryBackend {
    async fn load(&self, request: RegistryRequest<'_>) -> Result<CollectionMap, LoaderError> {
        match self {
            RegistryBackend::Packaged(registry) => registry.load(request).await,
            RegistryBackend::Http(registry) => registry.load(request).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            RegistryBackend::Packaged(registry) => registry.name(),
            RegistryBackend::Http(registry) => registry.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaged_from_default_settings() {
        let backend = RegistryBackend::from_settings(&RegistrySettings::default()).unwrap();
        assert!(matches!(backend, RegistryBackend::Packaged(_)));
        assert_eq!(backend.name(), "packaged");
    }

    #[test]
    fn test_http_from_settings() {
        let settings = RegistrySettings {
            kind: RegistryKind::Http,
            ..Default::default()
        };
        let backend = RegistryBackend::from_settings(&settings).unwrap();
        assert!(matches!(backend, RegistryBackend::Http(_)));
        assert_eq!(backend.name(), "iconify-api");
    }
}

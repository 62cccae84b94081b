//! Registry backed by the Iconify HTTP API.
//!
//! Each included collection is fetched with one request:
//!
//! ```text
//! GET {base}/{prefix}.json?icons=home,account
//! ```
//!
//! The API only serves named icons, so whole-collection selections are
//! rejected. Use [`PackagedRegistry`](super::PackagedRegistry) for those.

use std::future::Future;
use std::time::Duration;

use super::{select_icons, LoaderError, RegistryRequest, RegistrySource};
use crate::collection::{CollectionMap, IconCollection};
use crate::config::DEFAULT_REGISTRY_URL;

/// Async HTTP client abstraction for testability.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, LoaderError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new client with the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, LoaderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("iconpack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoaderError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, LoaderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoaderError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LoaderError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| LoaderError::Http(format!("Failed to read response: {}", e)))
    }
}

/// Loads registry collections from the Iconify API.
#[derive(Debug, Clone)]
pub struct HttpRegistry<C: AsyncHttpClient> {
    client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> HttpRegistry<C> {
    /// Creates a registry using the public Iconify API.
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_REGISTRY_URL)
    }

    /// Creates a registry using a custom API endpoint.
    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builds the request URL for a set of icons.
    fn build_url(&self, prefix: &str, names: &[&str]) -> String {
        format!("{}/{}.json?icons={}", self.base_url, prefix, names.join(","))
    }
}

impl<C: AsyncHttpClient> RegistrySource for HttpRegistry<C> {
    async fn load(&self, request: RegistryRequest<'_>) -> Result<CollectionMap, LoaderError> {
        let mut map = CollectionMap::new();

        for (prefix, selection) in request.include.iter() {
            if selection.is_all() {
                return Err(LoaderError::UnsupportedSelection {
                    prefix: prefix.to_string(),
                    reason: "the Iconify API serves named icons only".to_string(),
                });
            }

            let url = self.build_url(prefix, &selection.unique_names().into_iter().collect::<Vec<_>>());
            tracing::debug!(prefix, url = %url, "Fetching icons");

            let body = self.client.get(&url).await?;
            let collection: IconCollection =
                serde_json::from_slice(&body).map_err(|e| LoaderError::Parse {
                    source_name: url.clone(),
                    reason: e.to_string(),
                })?;

            match select_icons(&collection, selection) {
                Some(selected) => {
                    map.insert_as(prefix, selected);
                }
                None => {
                    tracing::warn!(prefix, "No requested icons returned, skipping collection");
                }
            }
        }

        Ok(map)
    }

    fn name(&self) -> &str {
        "iconify-api"
    }
}

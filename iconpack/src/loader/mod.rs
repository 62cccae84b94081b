//! Icon source loaders.
//!
//! Two kinds of source feed the aggregator:
//!
//! - a [`RegistrySource`] produces a whole [`CollectionMap`] from the
//!   `include` configuration (Iconify JSON packages or the Iconify API);
//! - a [`LocalSource`] produces a single [`IconCollection`] from a directory
//!   of SVG files.
//!
//! Both are traits so the aggregator can be driven by mocks in tests.
//!
//! # Implementations
//!
//! | Source | Type |
//! |---|---|
//! | `node_modules/@iconify-json/*`, `node_modules/@iconify/json` | [`PackagedRegistry`] |
//! | `https://api.iconify.design` | [`HttpRegistry`] |
//! | runtime choice from config | [`RegistryBackend`] |
//! | `src/icons/**/*.svg` | [`LocalDirectorySource`] |

mod backend;
mod error;
mod http;
mod local;
mod packaged;
mod select;
mod svg;

use std::future::Future;
use std::path::Path;

pub use backend::RegistryBackend;
pub use error::LoaderError;
pub use http::{AsyncHttpClient, HttpRegistry, ReqwestClient};
pub use local::LocalDirectorySource;
pub use packaged::PackagedRegistry;
pub use select::select_icons;
pub use svg::parse_svg;

use crate::collection::{CollectionMap, IconCollection};
use crate::config::{IncludeConfig, LocalOptions};

/// Input for a registry load.
#[derive(Debug, Clone, Copy)]
pub struct RegistryRequest<'a> {
    /// Project root.
    pub root: &'a Path,

    /// Collections and icons to include.
    pub include: &'a IncludeConfig,
}

/// Input for a local directory load.
#[derive(Debug, Clone, Copy)]
pub struct LocalRequest<'a> {
    /// Directory holding the icon files.
    pub directory: &'a Path,

    /// Processing options.
    pub options: &'a LocalOptions,
}

/// A source producing registry collections.
pub trait RegistrySource: Send + Sync {
    /// Load the requested collections.
    ///
    /// Failures are fatal for aggregation.
    fn load(
        &self,
        request: RegistryRequest<'_>,
    ) -> impl Future<Output = Result<CollectionMap, LoaderError>> + Send;

    /// Human-readable source name for log output.
    fn name(&self) -> &str;
}

/// A source producing the local, unprefixed collection.
pub trait LocalSource: Send + Sync {
    /// Load the local collection.
    ///
    /// Fails with [`LoaderError::DirectoryNotFound`] when the directory is
    /// absent and [`LoaderError::NoIcons`] when nothing matched.
    fn load(
        &self,
        request: LocalRequest<'_>,
    ) -> impl Future<Output = Result<IconCollection, LoaderError>> + Send;
}

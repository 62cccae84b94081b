//! iconpack - build-time icon aggregation for web projects
//!
//! This library gathers icon definitions from an icon registry (Iconify JSON
//! packages or the Iconify HTTP API) and a local directory of SVG files, merges
//! them into one collection map, and exposes that map to application code via
//! a virtual module. A TypeScript declaration listing every valid icon
//! identifier is kept in sync with the icon set, and is only rewritten when
//! the icon set actually changes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              VirtualModuleProvider               │
//! │  resolve_id("virtual:iconpack") → "\0virtual:…"  │
//! │  load("\0virtual:…") → export default {...}      │
//! └────────────────────┬─────────────────────────────┘
//!                      │ get_or_populate
//!                      ▼
//! ┌──────────────────────────────────────────────────┐
//! │                  SessionCache                    │
//! └────────────────────┬─────────────────────────────┘
//!                      │ once per session
//!                      ▼
//! ┌──────────────────────────────────────────────────┐
//! │                   Aggregator                     │
//! │  1. RegistrySource   (fatal on failure)          │
//! │  2. LocalSource      (non-fatal, local wins)     │
//! │  3. ArtifactCache::reconcile                     │
//! └────────────────────┬─────────────────────────────┘
//!                      ▼
//! ┌──────────────────────────────────────────────────┐
//! │  Fingerprint (SHA-256) ─► .iconpack/icons.d.ts   │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod aggregate;
pub mod artifact;
pub mod collection;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod loader;
pub mod logging;
pub mod module;
pub mod session;

pub use aggregate::Aggregator;
pub use artifact::{ArtifactCache, ArtifactStatus, ReconcileOutcome};
pub use collection::{CollectionMap, IconCollection, IconData, LOCAL_PREFIX};
pub use config::{ConfigFile, IconSelection, IncludeConfig, IntegrationConfig};
pub use error::{IconpackError, IconpackResult};
pub use fingerprint::Fingerprint;
pub use module::{BuildPlugin, VirtualModuleProvider, RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID};
pub use session::SessionCache;

/// Version of the iconpack library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Icon collection types.
//!
//! Collections follow the Iconify JSON layout: a `prefix` naming the icon set
//! and an `icons` table mapping icon names to their SVG body and dimensions.
//!
//! ```text
//! CollectionMap
//! ├── "mdi"   → IconCollection { icons: { "home", "account", ... } }
//! ├── "fa"    → IconCollection { icons: { ... } }
//! └── "local" → IconCollection { icons: { "logo", "brand/wordmark" } }
//! ```
//!
//! The `local` prefix is reserved for icons loaded from the project's own icon
//! directory. Those icons are referenced without a prefix in the generated
//! type declaration.

mod icon;
mod map;

pub use icon::{IconAlias, IconData};
pub use map::{CollectionMap, IconCollection};

/// Reserved prefix for icons loaded from the local icon directory.
pub const LOCAL_PREFIX: &str = "local";

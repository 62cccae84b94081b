//! Collections and the merged collection map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::icon::{IconAlias, IconData};

/// A named set of icons sharing a prefix.
///
/// Icon names are unique within a collection by construction (they are map
/// keys). The icon table preserves insertion order for serialization, but no
/// consumer attaches meaning to that order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IconCollection {
    /// Collection prefix (e.g. `mdi`).
    pub prefix: String,

    /// Icons keyed by name.
    pub icons: IndexMap<String, IconData>,

    /// Alternative names resolving to entries in `icons`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, IconAlias>,

    /// Default view box width for icons that omit one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Default view box height for icons that omit one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl IconCollection {
    /// Create an empty collection.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Add an icon, replacing any existing icon with the same name.
    pub fn with_icon(mut self, name: impl Into<String>, icon: IconData) -> Self {
        self.icons.insert(name.into(), icon);
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, name: impl Into<String>, alias: IconAlias) -> Self {
        self.aliases.insert(name.into(), alias);
        self
    }

    /// Number of icons (aliases excluded).
    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    /// Icon names in insertion order.
    pub fn icon_names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Check if the collection holds no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Merged mapping from prefix to collection.
///
/// Iteration follows insertion order. Replacing a collection keeps the
/// position of the prefix it replaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionMap {
    collections: IndexMap<String, IconCollection>,
}

impl CollectionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a collection under its own prefix.
    ///
    /// Returns the collection previously stored under that prefix.
    pub fn insert(&mut self, collection: IconCollection) -> Option<IconCollection> {
        self.collections
            .insert(collection.prefix.clone(), collection)
    }

    /// Insert a collection under an explicit prefix, rewriting its `prefix`
    /// field to match the key.
    pub fn insert_as(
        &mut self,
        prefix: impl Into<String>,
        mut collection: IconCollection,
    ) -> Option<IconCollection> {
        collection.prefix = prefix.into();
        self.insert(collection)
    }

    /// Look up a collection by prefix.
    pub fn get(&self, prefix: &str) -> Option<&IconCollection> {
        self.collections.get(prefix)
    }

    /// Check if a prefix is present.
    pub fn contains(&self, prefix: &str) -> bool {
        self.collections.contains_key(prefix)
    }

    /// Prefixes in insertion order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Collections in insertion order.
    pub fn collections(&self) -> impl Iterator<Item = &IconCollection> {
        self.collections.values()
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Total icons across all collections.
    pub fn total_icons(&self) -> usize {
        self.collections.values().map(IconCollection::icon_count).sum()
    }
}

impl FromIterator<IconCollection> for CollectionMap {
    fn from_iter<T: IntoIterator<Item = IconCollection>>(iter: T) -> Self {
        let mut map = Self::new();
        for collection in iter {
            map.insert(collection);
        }
        map
    }
}

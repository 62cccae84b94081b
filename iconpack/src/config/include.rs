//! Registry inclusion rules.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Selector meaning "every icon in the collection".
pub const WILDCARD: &str = "*";

/// Icons requested from one registry collection.
///
/// Serializes as the plain list of names, with `["*"]` selecting the whole
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSelection(Vec<String>);

impl IconSelection {
    /// Select the whole collection.
    pub fn all() -> Self {
        Self(vec![WILDCARD.to_string()])
    }

    /// Select the named icons.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parse a comma separated config value (`home, account` or `*`).
    pub fn parse_list(value: &str) -> Self {
        Self::names(
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// Check if the whole collection is selected.
    pub fn is_all(&self) -> bool {
        self.0.iter().any(|name| name == WILDCARD)
    }

    /// Requested names with duplicates removed, in first-seen order.
    pub fn unique_names(&self) -> IndexSet<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered map from collection prefix to the icons requested from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncludeConfig(IndexMap<String, IconSelection>);

impl IncludeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection for a prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, selection: IconSelection) {
        self.0.insert(prefix.into(), selection);
    }

    pub fn get(&self, prefix: &str) -> Option<&IconSelection> {
        self.0.get(prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains_key(prefix)
    }

    /// Entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconSelection)> {
        self.0.iter().map(|(prefix, selection)| (prefix.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, IconSelection)> for IncludeConfig {
    fn from_iter<T: IntoIterator<Item = (P, IconSelection)>>(iter: T) -> Self {
        let mut include = Self::new();
        for (prefix, selection) in iter {
            include.insert(prefix, selection);
        }
        include
    }
}

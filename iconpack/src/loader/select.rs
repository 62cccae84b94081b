//! Narrowing a registry collection to the requested icons.

use crate::collection::{IconCollection, IconData};
use crate::config::IconSelection;

/// Maximum alias chain length followed before giving up.
const MAX_ALIAS_DEPTH: usize = 8;

/// Reduce a collection to the icons named by `selection`.
///
/// A wildcard selection returns the collection unchanged. Otherwise each
/// requested name is looked up in `icons`, then in `aliases` (following the
/// parent chain and applying alias transformations). The result contains only
/// concrete icons, keyed by the requested name.
///
/// Names that resolve to nothing are logged and skipped. Returns `None` when
/// no requested icon could be resolved.
pub fn select_icons(
    collection: &IconCollection,
    selection: &IconSelection,
) -> Option<IconCollection> {
    if selection.is_all() {
        return Some(collection.clone());
    }

    let mut selected = IconCollection {
        prefix: collection.prefix.clone(),
        width: collection.width,
        height: collection.height,
        ..Default::default()
    };

    let mut missing = Vec::new();
    for name in selection.unique_names() {
        match resolve(collection, name) {
            Some(icon) => {
                selected.icons.insert(name.to_string(), icon);
            }
            None => missing.push(name),
        }
    }

    if !missing.is_empty() {
        tracing::warn!(
            prefix = %collection.prefix,
            missing = %missing.join(", "),
            "Requested icons not found in collection"
        );
    }

    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

fn resolve(collection: &IconCollection, name: &str) -> Option<IconData> {
    if let Some(icon) = collection.icons.get(name) {
        return Some(icon.clone());
    }

    // Walk up to a concrete icon, remembering the aliases passed on the way
    let mut chain = Vec::new();
    let mut current = name;
    loop {
        if chain.len() >= MAX_ALIAS_DEPTH {
            return None;
        }
        let alias = collection.aliases.get(current)?;
        chain.push(alias);
        if let Some(icon) = collection.icons.get(&alias.parent) {
            let mut icon = icon.clone();
            // Apply from the alias nearest the icon outwards
            for alias in chain.iter().rev() {
                icon.apply_alias(alias);
            }
            return Some(icon);
        }
        current = &alias.parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::IconAlias;

    fn mdi() -> IconCollection {
        let mut collection = IconCollection::new("mdi")
            .with_icon("home", IconData::new("<path d=\"home\"/>"))
            .with_icon("account", IconData::new("<path d=\"account\"/>"))
            .with_icon("arrow", IconData::new("<path d=\"arrow\"/>"))
            .with_alias("house", IconAlias::new("home"))
            .with_alias("building", IconAlias::new("house"))
            .with_alias(
                "arrow-left",
                IconAlias {
                    h_flip: Some(true),
                    ..IconAlias::new("arrow")
                },
            );
        collection.width = Some(24.0);
        collection.height = Some(24.0);
        collection
    }

    #[test]
    fn test_wildcard_keeps_everything() {
        let collection = mdi();
        let selected = select_icons(&collection, &IconSelection::all()).unwrap();
        assert_eq!(selected, collection);
    }

    #[test]
    fn test_named_selection() {
        let selected = select_icons(&mdi(), &IconSelection::names(["home"])).unwrap();

        assert_eq!(selected.icon_names().collect::<Vec<_>>(), vec!["home"]);
        assert!(selected.aliases.is_empty());
        assert_eq!(selected.width, Some(24.0));
    }

    #[test]
    fn test_alias_chain_resolves_to_concrete_icon() {
        let selected = select_icons(&mdi(), &IconSelection::names(["building"])).unwrap();
        assert_eq!(selected.icons["building"].body, "<path d=\"home\"/>");
    }

    #[test]
    fn test_alias_transformations_applied() {
        let selected = select_icons(&mdi(), &IconSelection::names(["arrow-left"])).unwrap();
        assert_eq!(selected.icons["arrow-left"].h_flip, Some(true));
    }

    #[test]
    fn test_missing_names_are_skipped() {
        let selected = select_icons(&mdi(), &IconSelection::names(["home", "nope"])).unwrap();
        assert_eq!(selected.icon_count(), 1);
    }

    #[test]
    fn test_nothing_resolved_yields_none() {
        assert!(select_icons(&mdi(), &IconSelection::names(["nope"])).is_none());
    }

    #[test]
    fn test_alias_cycle_terminates() {
        let collection = IconCollection::new("loop")
            .with_alias("a", IconAlias::new("b"))
            .with_alias("b", IconAlias::new("a"));

        assert!(select_icons(&collection, &IconSelection::names(["a"])).is_none());
    }
}

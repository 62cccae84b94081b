//! TypeScript declaration rendering.

use super::header::render_header;
use crate::collection::IconCollection;
use crate::error::IconpackResult;
use crate::fingerprint::Fingerprint;

/// Type used when no icon exists, so any icon reference fails to type-check.
const EMPTY_UNION: &str = "never";

/// Icon identifiers declared for a set of collections.
///
/// Icons in `default_pack` are referenced by bare name, every other icon as
/// `prefix:name`. Collections are visited in order, icons in table order.
pub fn icon_identifiers<'a>(
    collections: impl IntoIterator<Item = &'a IconCollection>,
    default_pack: &str,
) -> Vec<String> {
    collections
        .into_iter()
        .flat_map(|collection| {
            let unprefixed = collection.prefix == default_pack;
            collection.icon_names().map(move |name| {
                if unprefixed {
                    name.to_string()
                } else {
                    format!("{}:{}", collection.prefix, name)
                }
            })
        })
        .collect()
}

/// Render the complete declaration file.
///
/// Members are written as JSON string literals, which TypeScript accepts
/// unchanged.
pub fn render_declaration(
    fingerprint: &Fingerprint,
    module_id: &str,
    identifiers: &[String],
) -> IconpackResult<String> {
    let union = if identifiers.is_empty() {
        EMPTY_UNION.to_string()
    } else {
        identifiers
            .iter()
            .map(|id| -> IconpackResult<String> {
                Ok(format!("\n\t\t| {}", serde_json::to_string(id)?))
            })
            .collect::<IconpackResult<String>>()?
    };

    Ok(format!(
        "{}\ndeclare module '{}' {{\n\texport type Icon = {};\n}}\n",
        render_header(fingerprint),
        module_id,
        union
    ))
}

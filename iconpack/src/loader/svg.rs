//! Extraction of Iconify icon records from SVG files.
//!
//! Only the root `<svg>` element is inspected: its `viewBox` (or `width` and
//! `height`) attributes give the icon dimensions and its inner markup becomes
//! the icon body. The markup itself is passed through untouched, sliced from
//! the source text between the root start and end tags.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::LoaderError;
use crate::collection::IconData;

/// Root element attributes that carry dimensions.
#[derive(Debug, Default)]
struct RootAttributes {
    view_box: Option<String>,
    width: Option<String>,
    height: Option<String>,
}

/// Parse the contents of an SVG file into an icon record.
///
/// `path` is only used for error reporting.
pub fn parse_svg(path: &Path, text: &str) -> Result<IconData, LoaderError> {
    let invalid = |reason: String| LoaderError::InvalidIcon {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = Reader::from_str(text);
    let mut root: Option<RootAttributes> = None;
    let mut body_start = 0;
    let mut depth = 0usize;

    let body = loop {
        let position = offset(reader.buffer_position());
        let event = reader.read_event().map_err(|e| invalid(e.to_string()))?;

        match event {
            Event::Start(start) if root.is_none() => {
                root = Some(root_attributes(&start).map_err(invalid)?);
                body_start = offset(reader.buffer_position());
                depth = 1;
            }
            Event::Empty(start) if root.is_none() => {
                root = Some(root_attributes(&start).map_err(invalid)?);
                break "";
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if root.is_some() => {
                depth -= 1;
                if depth == 0 {
                    break text.get(body_start..position).unwrap_or_default().trim();
                }
            }
            Event::Eof => {
                let reason = if root.is_some() {
                    "unclosed <svg> root element"
                } else {
                    "missing <svg> root element"
                };
                return Err(invalid(reason.to_string()));
            }
            _ => {}
        }
    };

    let attributes = root.unwrap_or_default();
    let mut icon = IconData::new(body);

    if let Some(view_box) = attributes.view_box {
        let [left, top, width, height] = parse_view_box(&view_box)
            .ok_or_else(|| invalid(format!("malformed viewBox '{}'", view_box)))?;
        icon.left = (left != 0.0).then_some(left);
        icon.top = (top != 0.0).then_some(top);
        icon.width = Some(width);
        icon.height = Some(height);
    } else {
        icon.width = attributes.width.as_deref().and_then(parse_length);
        icon.height = attributes.height.as_deref().and_then(parse_length);
    }

    Ok(icon)
}

/// Read the dimension attributes of the root element, which must be `<svg>`.
fn root_attributes(start: &BytesStart<'_>) -> Result<RootAttributes, String> {
    if start.local_name().as_ref() != b"svg" {
        return Err("missing <svg> root element".to_string());
    }

    let mut attributes = RootAttributes::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let slot = match attr.key.as_ref() {
            b"viewBox" => &mut attributes.view_box,
            b"width" => &mut attributes.width,
            b"height" => &mut attributes.height,
            _ => continue,
        };
        *slot = Some(attr.unescape_value().map_err(|e| e.to_string())?.into_owned());
    }

    Ok(attributes)
}

fn offset(position: u64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}

fn parse_view_box(value: &str) -> Option<[f64; 4]> {
    let numbers: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    numbers.try_into().ok()
}

/// Parse a length such as `24`, `24px` or `1.5`. Relative units are ignored.
fn parse_length(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").parse().ok()
}

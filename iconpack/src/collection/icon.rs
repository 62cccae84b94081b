//! Individual icon records.

use serde::{Deserialize, Serialize};

/// A single icon in Iconify format.
///
/// `body` holds the inner markup of the `<svg>` element; the remaining fields
/// describe its view box and transformations. Absent fields fall back to the
/// collection defaults when rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconData {
    /// Inner SVG markup.
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Left edge of the view box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    /// Top edge of the view box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    /// Rotation in quarter turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_flip: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_flip: Option<bool>,
}

impl IconData {
    /// Create an icon from its inner markup.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the view box dimensions.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Apply the overrides carried by an alias.
    ///
    /// Dimensions are replaced, rotation accumulates modulo a full turn and
    /// flips toggle, matching how Iconify merges alias transformations.
    pub fn apply_alias(&mut self, alias: &IconAlias) {
        if alias.width.is_some() {
            self.width = alias.width;
        }
        if alias.height.is_some() {
            self.height = alias.height;
        }
        if alias.left.is_some() {
            self.left = alias.left;
        }
        if alias.top.is_some() {
            self.top = alias.top;
        }
        if let Some(rotate) = alias.rotate {
            let total = (self.rotate.unwrap_or(0) % 4 + rotate % 4) % 4;
            self.rotate = (total != 0).then_some(total);
        }
        if alias.h_flip == Some(true) {
            self.h_flip = (!self.h_flip.unwrap_or(false)).then_some(true);
        }
        if alias.v_flip == Some(true) {
            self.v_flip = (!self.v_flip.unwrap_or(false)).then_some(true);
        }
    }
}

/// An alternative name for another icon in the same collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconAlias {
    /// Name of the icon (or alias) this alias points to.
    pub parent: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_flip: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_flip: Option<bool>,
}

impl IconAlias {
    /// Create a plain alias with no transformations.
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }
}

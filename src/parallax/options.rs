//! Parallax options and their defaults

use serde::{Deserialize, Serialize};

use super::metrics::{AnchorX, AnchorY};

pub const DEFAULT_ANCHOR_X: AnchorX = AnchorX::Center;
pub const DEFAULT_ANCHOR_Y: AnchorY = AnchorY::Middle;
pub const DEFAULT_PROPERTY_Y: &str = "--parallax";
pub const DEFAULT_STRENGTH: f64 = 0.5;
pub const DEFAULT_IGNORE_OUTSIDE_VIEWPORT: bool = true;

/// Reference points per axis; `None` contributes a zero offset
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Anchors {
    pub x: Option<AnchorX>,
    pub y: Option<AnchorY>,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            x: Some(DEFAULT_ANCHOR_X),
            y: Some(DEFAULT_ANCHOR_Y),
        }
    }
}

/// Custom properties written per axis; `None` leaves that axis alone
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PropertyNames {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            x: None,
            y: Some(DEFAULT_PROPERTY_Y.to_string()),
        }
    }
}

/// Options for a tracked parallax element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParallaxOptions {
    pub anchors: Anchors,

    pub css_property_names: PropertyNames,

    /// Multiplier applied to the raw offset; zero disables the effect
    pub strength: f64,

    /// Skip writes while the element is vertically outside the window
    pub ignore_outside_viewport: bool,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            anchors: Anchors::default(),
            css_property_names: PropertyNames::default(),
            strength: DEFAULT_STRENGTH,
            ignore_outside_viewport: DEFAULT_IGNORE_OUTSIDE_VIEWPORT,
        }
    }
}

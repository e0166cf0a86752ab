//! Entrance options and their defaults

use serde::{Deserialize, Serialize};

use crate::utils::{IntersectionOptions, SegmentOptions};

pub const DEFAULT_CLASS_ENTERED: &str = "__entered";
pub const DEFAULT_CLASS_HAS_SEGMENTS: &str = "__segmented";
pub const DEFAULT_CLASS_FINISHED: &str = "__finished";

/// Tag, class and role of the default segment wrapper (`<span class="segment" role="text">`)
pub const DEFAULT_SEGMENT_TAG: &str = "span";
pub const DEFAULT_SEGMENT_CLASS: &str = "segment";
pub const DEFAULT_SEGMENT_ROLE: &str = "text";

fn default_class_entered() -> String {
    DEFAULT_CLASS_ENTERED.to_string()
}

fn default_class_has_segments() -> String {
    DEFAULT_CLASS_HAS_SEGMENTS.to_string()
}

fn default_class_finished() -> String {
    DEFAULT_CLASS_FINISHED.to_string()
}

/// Options for whole-element entrances
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementOptions {
    /// Class added once the element has entered the viewport
    #[serde(default = "default_class_entered")]
    pub class_entered: String,

    #[serde(default)]
    pub intersection_options: IntersectionOptions,
}

impl Default for ElementOptions {
    fn default() -> Self {
        Self {
            class_entered: default_class_entered(),
            intersection_options: IntersectionOptions::default(),
        }
    }
}

/// Options for segmented entrances
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentsOptions {
    /// Class added to the element and to each segment as it enters
    #[serde(default = "default_class_entered")]
    pub class_entered: String,

    /// Class added to the element at setup, whether or not it has entered
    #[serde(default = "default_class_has_segments")]
    pub class_has_segments: String,

    /// Class added to the element after its last segment has entered
    #[serde(default = "default_class_finished")]
    pub class_finished: String,

    /// Delay in milliseconds between consecutive segments
    pub step_delay: u32,

    #[serde(flatten)]
    pub segmentation: SegmentOptions,

    #[serde(default)]
    pub intersection_options: IntersectionOptions,
}

impl SegmentsOptions {
    /// Default classes and segmentation with the given step delay
    pub fn with_step_delay(step_delay: u32) -> Self {
        Self {
            class_entered: default_class_entered(),
            class_has_segments: default_class_has_segments(),
            class_finished: default_class_finished(),
            step_delay,
            segmentation: SegmentOptions::default(),
            intersection_options: IntersectionOptions::default(),
        }
    }
}

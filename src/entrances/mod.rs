//! Scroll-triggered entrances
//!
//! Whole-element entrances add a class when the element first enters the
//! viewport. Segmented entrances wrap the element's text into segments up
//! front and stagger the class onto each segment once the element enters.

pub mod elements;
pub mod options;
pub mod segments;

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub use elements::{reveal_element, ElementEntrance};
pub use options::{ElementOptions, SegmentsOptions};
pub use segments::{default_segment_template, reveal_segments, SegmentsEntrance};

/// Progress of an entrance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceState {
    #[default]
    NotEntered,
    /// Segments are being staggered in
    Entering,
    /// Whole-element entrance complete
    Entered,
    /// All segments have entered
    Finished,
}

impl EntranceState {
    pub fn as_str(self) -> &'static str {
        match self {
            EntranceState::NotEntered => "not-entered",
            EntranceState::Entering => "entering",
            EntranceState::Entered => "entered",
            EntranceState::Finished => "finished",
        }
    }
}

/// Entrance state shared between a handle and its callbacks
pub(crate) type SharedState = Rc<Cell<EntranceState>>;

/// Something an entrance can add classes to
pub(crate) trait Classes {
    fn add_class(&self, class_name: &str);
}

impl Classes for web_sys::Element {
    fn add_class(&self, class_name: &str) {
        if let Err(err) = self.class_list().add_1(class_name) {
            log::warn!("failed to add class {:?}: {:?}", class_name, err);
        }
    }
}

//! Whole-element entrances

use std::rc::Rc;

use web_sys::Element;

use super::options::ElementOptions;
use super::{Classes, EntranceState, SharedState};
use crate::error::Result;
use crate::utils::{on_first_intersection, FirstIntersection};

/// Handle for a whole-element entrance
#[derive(Debug)]
pub struct ElementEntrance {
    trigger: FirstIntersection,
    state: SharedState,
}

impl ElementEntrance {
    pub fn state(&self) -> EntranceState {
        self.state.get()
    }

    /// Keep the entrance armed for the lifetime of the page
    pub fn forget(self) {
        self.trigger.forget();
    }
}

/// Add `options.class_entered` to `element` the first time it enters the viewport
pub fn reveal_element(element: &Element, options: &ElementOptions) -> Result<ElementEntrance> {
    let state: SharedState = Rc::default();
    let class_entered = options.class_entered.clone();

    let entered_state = Rc::clone(&state);
    let trigger = on_first_intersection(element, &options.intersection_options, move |target| {
        enter_whole(&target, &class_entered, &entered_state);
    })?;

    Ok(ElementEntrance { trigger, state })
}

/// The element has entered: mark it and complete the entrance
pub(crate) fn enter_whole<T: Classes>(target: &T, class_entered: &str, state: &SharedState) {
    target.add_class(class_entered);
    state.set(EntranceState::Entered);
}

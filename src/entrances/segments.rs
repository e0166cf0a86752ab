//! Segmented entrances
//!
//! The element's text is wrapped into segments at setup time. Once the element
//! enters the viewport it receives the entered class, then each segment
//! receives it in turn, `step_delay` milliseconds apart. The finished class is
//! added after the last segment.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::options::{
    SegmentsOptions, DEFAULT_SEGMENT_CLASS, DEFAULT_SEGMENT_ROLE, DEFAULT_SEGMENT_TAG,
};
use super::{Classes, EntranceState, SharedState};
use crate::error::Result;
use crate::utils::{on_first_intersection, stagger, wrap_segments, FirstIntersection, Timers};

/// `<span class="segment" role="text">`
pub fn default_segment_template(document: &Document) -> Result<Element> {
    let template = document.create_element(DEFAULT_SEGMENT_TAG)?;
    template.set_class_name(DEFAULT_SEGMENT_CLASS);
    template.set_attribute("role", DEFAULT_SEGMENT_ROLE)?;
    Ok(template)
}

/// Handle for a segmented entrance
#[derive(Debug)]
pub struct SegmentsEntrance {
    trigger: FirstIntersection,
    state: SharedState,
    segments: Vec<Element>,
}

impl SegmentsEntrance {
    pub fn state(&self) -> EntranceState {
        self.state.get()
    }

    /// Wrappers created for the element, in document order
    pub fn segments(&self) -> &[Element] {
        &self.segments
    }

    /// Keep the entrance armed for the lifetime of the page
    pub fn forget(self) {
        self.trigger.forget();
    }
}

/// Wrap `element`'s segments now and stagger them in when it enters the viewport.
///
/// Without `Intl.Segmenter` no segments are created; the element still gets the
/// entered and finished classes.
pub fn reveal_segments(
    element: &Element,
    template: &Element,
    options: &SegmentsOptions,
    timers: Rc<dyn Timers>,
) -> Result<SegmentsEntrance> {
    let segments = wrap_segments(element, template, &options.segmentation)?.unwrap_or_default();
    element.add_class(&options.class_has_segments);

    let state: SharedState = Rc::default();
    let trigger = {
        let state = Rc::clone(&state);
        let segments = segments.clone();
        let entrance_options = options.clone();

        on_first_intersection(element, &options.intersection_options, move |target| {
            enter_segments(target, segments, &entrance_options, state, timers.as_ref());
        })?
    };

    Ok(SegmentsEntrance {
        trigger,
        state,
        segments,
    })
}

/// The element has entered: mark it, then stagger the entered class onto
/// each segment and mark it finished after the last one
pub(crate) fn enter_segments<T: Classes + 'static>(
    target: T,
    segments: Vec<T>,
    options: &SegmentsOptions,
    state: SharedState,
    timers: &dyn Timers,
) {
    target.add_class(&options.class_entered);
    state.set(EntranceState::Entering);

    let class_entered = options.class_entered.clone();
    let class_finished = options.class_finished.clone();
    let result = stagger(
        timers,
        segments,
        options.step_delay,
        move |segment, _| segment.add_class(&class_entered),
        move || {
            target.add_class(&class_finished);
            state.set(EntranceState::Finished);
        },
    );
    if let Err(err) = result {
        log::warn!("failed to schedule segment entrance: {}", err);
    }
}

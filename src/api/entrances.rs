//! Entrance exports

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, js_error, options_or_default};
use crate::entrances::{
    self, default_segment_template, ElementEntrance, ElementOptions, EntranceState,
    SegmentsEntrance, SegmentsOptions,
};
use crate::error::EffectsError;
use crate::utils::{self, SegmentOptions, WindowTimers};

enum Inner {
    Element(ElementEntrance),
    Segments(SegmentsEntrance),
}

/// Handle returned to JS for a registered entrance.
///
/// The entrance stays armed until `free()` is called on the handle.
#[wasm_bindgen]
pub struct Entrance {
    inner: Inner,
}

#[wasm_bindgen]
impl Entrance {
    /// `"not-entered"`, `"entering"`, `"entered"` or `"finished"`
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        let state: EntranceState = match &self.inner {
            Inner::Element(entrance) => entrance.state(),
            Inner::Segments(entrance) => entrance.state(),
        };
        state.as_str().to_string()
    }

    /// Number of wrapped segments (always 0 for whole-element entrances)
    #[wasm_bindgen(getter, js_name = segmentCount)]
    pub fn segment_count(&self) -> usize {
        match &self.inner {
            Inner::Element(_) => 0,
            Inner::Segments(entrance) => entrance.segments().len(),
        }
    }
}

/// Add a class to `target` when it first scrolls into view
#[wasm_bindgen(js_name = revealElement)]
pub fn reveal_element(target: &Element, options: JsValue) -> Result<Entrance, JsValue> {
    let options: ElementOptions = options_or_default(options, "revealElement options")?;
    let entrance =
        entrances::reveal_element(target, &options).map_err(|e| js_error(e, "revealElement"))?;
    Ok(Entrance {
        inner: Inner::Element(entrance),
    })
}

/// Split `target` into segments and stagger them in when it first scrolls into view.
///
/// `template` is cloned for every segment; it defaults to `<span class="segment" role="text">`.
#[wasm_bindgen(js_name = revealSegments)]
pub fn reveal_segments(
    target: &Element,
    options: JsValue,
    template: Option<Element>,
) -> Result<Entrance, JsValue> {
    let options: SegmentsOptions = deserialize(options, "revealSegments options")?;

    let result = (|| {
        let template = match template {
            Some(template) => template,
            None => {
                let document = target.owner_document().ok_or(EffectsError::NoDocument)?;
                default_segment_template(&document)?
            }
        };
        let timers = Rc::new(WindowTimers::new()?);
        entrances::reveal_segments(target, &template, &options, timers)
    })();

    let entrance = result.map_err(|e| js_error(e, "revealSegments"))?;
    Ok(Entrance {
        inner: Inner::Segments(entrance),
    })
}

/// Wrap the segments of `target`'s direct text children in clones of `template`.
///
/// Returns the wrappers, or `undefined` when `Intl.Segmenter` is unavailable.
#[wasm_bindgen(js_name = wrapSegments)]
pub fn wrap_segments(
    target: &Element,
    template: &Element,
    options: JsValue,
) -> Result<Option<js_sys::Array>, JsValue> {
    let options: SegmentOptions = options_or_default(options, "wrapSegments options")?;
    let wrappers = utils::wrap_segments(target, template, &options)
        .map_err(|e| js_error(e, "wrapSegments"))?;
    Ok(wrappers.map(|wrappers| wrappers.into_iter().collect()))
}

//! Parallax exports

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::helpers::{js_error, options_or_default};
use crate::parallax::{self, ParallaxOptions};

/// JS handle for a [`parallax::ParallaxEngine`].
///
/// Construct one per page; `free()` detaches its listeners.
#[wasm_bindgen(js_name = ParallaxEngine)]
pub struct ParallaxEngineHandle {
    engine: parallax::ParallaxEngine,
}

#[wasm_bindgen(js_class = ParallaxEngine)]
impl ParallaxEngineHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ParallaxEngineHandle, JsValue> {
        let engine = parallax::ParallaxEngine::new().map_err(|e| js_error(e, "ParallaxEngine"))?;
        Ok(Self { engine })
    }

    /// Track `element` with the given options (all optional)
    pub fn track(&self, element: HtmlElement, options: JsValue) -> Result<(), JsValue> {
        let options: ParallaxOptions = options_or_default(options, "track options")?;
        self.engine
            .track(element, options)
            .map_err(|e| js_error(e, "ParallaxEngine.track"))
    }

    /// Reposition every tracked element from the current scroll position
    pub fn refresh(&self) {
        self.engine.refresh();
    }

    /// Number of tracked elements
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.engine.len()
    }
}

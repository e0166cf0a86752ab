//! Browser-driven parallax engine
//!
//! [`ParallaxEngine`] owns a [`ParallaxRegistry`] of `HtmlElement`s plus the
//! listeners that feed it: one `ResizeObserver` on the document root and one
//! passive `scroll` listener on the window. Dropping the engine detaches both.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{AddEventListenerOptions, Event, HtmlElement, ResizeObserver, Window};

use super::metrics::{ClientRect, Viewport};
use super::options::ParallaxOptions;
use super::registry::{ParallaxRegistry, ParallaxTarget};
use crate::error::{EffectsError, Result};

impl ParallaxTarget for HtmlElement {
    fn client_rect(&self) -> ClientRect {
        let rect = self.get_bounding_client_rect();
        ClientRect {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn set_property(&self, name: &str, value: &str) -> Result<()> {
        self.style().set_property(name, value)?;
        Ok(())
    }
}

/// Current scroll offset and inner size of `window`
fn read_viewport(window: &Window) -> Viewport {
    let number = |value: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        scroll_x: window.scroll_x().unwrap_or(0.0),
        scroll_y: window.scroll_y().unwrap_or(0.0),
        width: number(window.inner_width()),
        height: number(window.inner_height()),
    }
}

type Registry = Rc<RefCell<ParallaxRegistry<HtmlElement>>>;
type ResizeCallback = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;
type ScrollCallback = Closure<dyn FnMut(Event)>;

/// Scroll-linked parallax for a set of elements
pub struct ParallaxEngine {
    registry: Registry,
    window: Window,
    resize_observer: ResizeObserver,
    _on_resize: ResizeCallback,
    on_scroll: ScrollCallback,
}

impl std::fmt::Debug for ParallaxEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxEngine")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

impl ParallaxEngine {
    /// Read the initial scroll metrics and install the resize and scroll listeners
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
        let document = window.document().ok_or(EffectsError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or(EffectsError::NoDocumentElement)?;

        let registry: Registry = Rc::new(RefCell::new(ParallaxRegistry::new(read_viewport(&window))));

        let on_resize: ResizeCallback = {
            let registry = Rc::clone(&registry);
            let window = window.clone();
            Closure::wrap(Box::new(move |_entries: js_sys::Array, _observer: ResizeObserver| {
                let Ok(mut registry) = registry.try_borrow_mut() else {
                    log::debug!("parallax registry busy, skipping resize");
                    return;
                };
                registry.set_viewport(read_viewport(&window));
                registry.handle_resize();
            }) as Box<dyn FnMut(_, _)>)
        };
        let resize_observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        resize_observer.observe(&root);

        let on_scroll: ScrollCallback = {
            let registry = Rc::clone(&registry);
            let window = window.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                let Ok(mut registry) = registry.try_borrow_mut() else {
                    log::debug!("parallax registry busy, skipping scroll");
                    return;
                };
                registry.handle_scroll(read_viewport(&window));
            }) as Box<dyn FnMut(_)>)
        };
        let listener_options = AddEventListenerOptions::new();
        listener_options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &listener_options,
        )?;

        log::debug!("parallax engine listening");
        Ok(Self {
            registry,
            window,
            resize_observer,
            _on_resize: on_resize,
            on_scroll,
        })
    }

    /// Start tracking `element`; it is measured and positioned immediately
    pub fn track(&self, element: HtmlElement, options: ParallaxOptions) -> Result<()> {
        let mut registry = self
            .registry
            .try_borrow_mut()
            .map_err(|_| EffectsError::Js("parallax registry is busy".to_string()))?;
        registry.track(element, options);
        Ok(())
    }

    /// Re-read the window and reposition every entry, as a scroll event would
    pub fn refresh(&self) {
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            registry.handle_scroll(read_viewport(&self.window));
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ParallaxEngine {
    fn drop(&mut self) {
        self.resize_observer.disconnect();
        let removed = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if removed.is_err() {
            log::warn!("failed to remove parallax scroll listener");
        }
    }
}

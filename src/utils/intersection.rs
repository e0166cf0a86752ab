//! One-shot viewport entrance detection
//!
//! Wraps an `IntersectionObserver` that watches a single element until it first
//! intersects the viewport, then stops observing and fires once.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Options forwarded to the `IntersectionObserver`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IntersectionOptions {
    /// CSS-style margin around the root, e.g. `"0px 0px -10% 0px"`
    pub root_margin: Option<String>,

    /// Visibility ratios at which the observer reports; empty uses the host default
    pub thresholds: Vec<f64>,
}

impl IntersectionOptions {
    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        if let Some(margin) = &self.root_margin {
            init.set_root_margin(margin);
        }
        if !self.thresholds.is_empty() {
            let thresholds: js_sys::Array = self
                .thresholds
                .iter()
                .map(|t| JsValue::from_f64(*t))
                .collect();
            init.set_threshold(&thresholds);
        }
        init
    }
}

/// Callback slot that can be taken at most once
pub struct OneShot<F> {
    callback: Cell<Option<F>>,
}

impl<F> OneShot<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback: Cell::new(Some(callback)),
        }
    }

    /// Take the callback if it has not fired yet
    pub fn take(&self) -> Option<F> {
        self.callback.take()
    }

    pub fn has_fired(&self) -> bool {
        let callback = self.callback.take();
        let fired = callback.is_none();
        self.callback.set(callback);
        fired
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Handle for an active one-shot entrance observer.
///
/// Dropping the handle disconnects the observer. Call [`forget`](Self::forget)
/// to keep it alive for the lifetime of the page.
pub struct FirstIntersection {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl std::fmt::Debug for FirstIntersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstIntersection")
            .field("observer", &"IntersectionObserver")
            .finish()
    }
}

impl FirstIntersection {
    /// Keep observing until the page unloads
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for FirstIntersection {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `callback` once, the first time `element` intersects the viewport.
///
/// Each call creates its own observer, so triggers on different elements are
/// independent.
pub fn on_first_intersection<F>(
    element: &Element,
    options: &IntersectionOptions,
    callback: F,
) -> Result<FirstIntersection>
where
    F: FnOnce(Element) + 'static,
{
    let target = element.clone();
    let slot = OneShot::new(callback);

    let closure: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting() && entry.target() == target);
            if !entered {
                return;
            }

            observer.unobserve(&target);
            if let Some(callback) = slot.take() {
                log::debug!("element entered viewport");
                callback(target.clone());
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options.to_init())?;
    observer.observe(element);

    Ok(FirstIntersection {
        observer,
        _callback: closure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_one_shot_fires_at_most_once() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let slot = OneShot::new(move || c.set(c.get() + 1));

        assert!(!slot.has_fired());
        for _ in 0..3 {
            if let Some(callback) = slot.take() {
                callback();
            }
        }

        assert_eq!(count.get(), 1);
        assert!(slot.has_fired());
    }

    #[test]
    fn test_intersection_options_defaults() {
        let options: IntersectionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, IntersectionOptions::default());

        let options: IntersectionOptions =
            serde_json::from_str(r#"{"rootMargin":"0px 0px -20% 0px","thresholds":[0,0.5]}"#).unwrap();
        assert_eq!(options.root_margin.as_deref(), Some("0px 0px -20% 0px"));
        assert_eq!(options.thresholds, vec![0.0, 0.5]);
    }
}

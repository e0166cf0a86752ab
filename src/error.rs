//! Error types for effect setup
//!
//! Effects are best-effort: most failures are logged and skipped. The errors
//! here cover the setup paths that cannot continue (no window, an observer that
//! could not be constructed, options that could not be parsed).

use thiserror::Error;
use wasm_bindgen::{JsCast as _, JsValue};

/// Top-level error type for the effects library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectsError {
    /// No global `window` (not running in a browser main thread)
    #[error("no global window available")]
    NoWindow,

    /// The window has no document
    #[error("window has no document")]
    NoDocument,

    /// The document has no root element to observe
    #[error("document has no root element")]
    NoDocumentElement,

    /// Options object could not be deserialized
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A host capability is missing
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// A DOM or JS call threw
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for EffectsError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        EffectsError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for EffectsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        EffectsError::InvalidOptions(err.to_string())
    }
}

impl From<EffectsError> for JsValue {
    fn from(err: EffectsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T, E = EffectsError> = std::result::Result<T, E>;

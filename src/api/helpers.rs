//! Shared helpers for the JS-facing API
//!
//! Options arrive as plain JS objects and are deserialized with
//! `serde-wasm-bindgen`; errors leave as strings after being logged.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::error::EffectsError;

// ============================================================================
// Deserialization Helpers
// ============================================================================

/// Deserialize an options object, treating `undefined`/`null` as all defaults
pub fn options_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Deserialize a required options object
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(EffectsError::from(e), error_context))
}

// ============================================================================
// Error Conversion
// ============================================================================

/// Log `err` and convert it for JS, prefixed with `error_context`
pub fn js_error(err: EffectsError, error_context: &str) -> JsValue {
    let msg = format!("{}: {}", error_context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

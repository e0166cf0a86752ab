//! JavaScript-facing API
//!
//! Thin `#[wasm_bindgen]` exports: each one deserializes its options object,
//! fills in defaults and forwards to the core modules.
//!
//! # Module Structure
//!
//! - `helpers`: options deserialization and error conversion
//! - `entrances`: `revealElement`, `revealSegments`, `wrapSegments`
//! - `parallax`: the `ParallaxEngine` class
//! - `logging`: `setLogLevel`

pub mod entrances;
pub mod helpers;
pub mod logging;
pub mod parallax;

pub use entrances::{reveal_element, reveal_segments, wrap_segments, Entrance};
pub use logging::set_log_level;
pub use parallax::ParallaxEngineHandle;

//! Scroll Effects WASM Module
//!
//! Browser-side visual effects driven by scrolling: elements that reveal
//! themselves when they enter the viewport (optionally one text segment at a
//! time) and parallax offsets exposed as CSS custom properties.

pub mod api;
pub mod entrances;
pub mod error;
pub mod parallax;
pub mod utils;

// Re-export commonly used types
pub use entrances::{
    reveal_element, reveal_segments, ElementEntrance, ElementOptions, EntranceState,
    SegmentsEntrance, SegmentsOptions,
};
pub use error::EffectsError;
pub use parallax::{ParallaxEngine, ParallaxOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Scroll effects WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

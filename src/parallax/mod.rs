//! Scroll-linked parallax
//!
//! Each tracked element gets one CSS custom property per configured axis,
//! holding its distance from an anchor (an edge or midpoint of the element, or
//! of the viewport) multiplied by a strength. The stylesheet turns the
//! unitless value into a transform with `calc()`.
//!
//! # Module Structure
//!
//! - `metrics`: document-space geometry and anchor math
//! - `options`: per-element options and defaults
//! - `registry`: the ordered entry list and shared scroll metrics
//! - `engine`: browser listeners driving the registry

pub mod engine;
pub mod metrics;
pub mod options;
pub mod registry;

pub use engine::ParallaxEngine;
pub use metrics::{AnchorX, AnchorY, ClientRect, Metrics, Viewport};
pub use options::{Anchors, ParallaxOptions, PropertyNames};
pub use registry::{ParallaxEntry, ParallaxRegistry, ParallaxTarget};

//! Building blocks shared by the entrance effects
//!
//! - `timing`: staggered scheduling over browser timers
//! - `segments`: locale-aware text splitting and wrapping
//! - `intersection`: one-shot viewport entrance observers

pub mod intersection;
pub mod segments;
pub mod timing;

pub use intersection::{on_first_intersection, FirstIntersection, IntersectionOptions};
pub use segments::{
    wrap_segments, wrap_segments_with, Granularity, LocaleMatcher, SegmentOptions, Segmenter,
};
pub use timing::{stagger, Timers, WindowTimers};

//! Parallax geometry
//!
//! All values are document-absolute pixels: element boxes are measured as
//! client rects offset by the scroll position at measurement time, so every
//! offset is a plain difference.

use serde::{Deserialize, Serialize};

/// Edges and midpoints of a box in document coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    pub top: f64,
    pub bottom: f64,
    pub middle: f64,
    pub left: f64,
    pub right: f64,
    pub center: f64,
}

impl Metrics {
    /// Box with its derived midpoints
    pub fn from_bounds(left: f64, top: f64, width: f64, height: f64) -> Self {
        let bottom = top + height;
        let right = left + width;
        Self {
            top,
            bottom,
            middle: midpoint(top, bottom),
            left,
            right,
            center: midpoint(left, right),
        }
    }

    /// Metrics of the visible window
    pub fn viewport(viewport: &Viewport) -> Self {
        Self::from_bounds(viewport.scroll_x, viewport.scroll_y, viewport.width, viewport.height)
    }

    /// Document-absolute metrics of a client rect measured while `scroll` was current
    pub fn measure(rect: &ClientRect, scroll: &Metrics) -> Self {
        Self::from_bounds(scroll.left + rect.x, scroll.top + rect.y, rect.width, rect.height)
    }

    /// Whether the vertical extents of `self` and `window` overlap
    pub fn overlaps_vertically(&self, window: &Metrics) -> bool {
        !(self.bottom < window.top || self.top > window.bottom)
    }

    fn x(&self, edge: EdgeX) -> f64 {
        match edge {
            EdgeX::Left => self.left,
            EdgeX::Center => self.center,
            EdgeX::Right => self.right,
        }
    }

    fn y(&self, edge: EdgeY) -> f64 {
        match edge {
            EdgeY::Top => self.top,
            EdgeY::Middle => self.middle,
            EdgeY::Bottom => self.bottom,
        }
    }
}

fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Scroll offset and inner size of the window
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Client-relative bounding rect, as `getBoundingClientRect` reports it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeX {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeY {
    Top,
    Middle,
    Bottom,
}

/// Horizontal reference point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorX {
    Left,
    Center,
    Right,
    ViewportLeft,
    ViewportCenter,
    ViewportRight,
}

/// Vertical reference point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorY {
    Top,
    Middle,
    Bottom,
    ViewportTop,
    ViewportMiddle,
    ViewportBottom,
}

impl AnchorX {
    /// Distance of `element` from the window along this anchor.
    ///
    /// Element anchors subtract the window's same-named edge from the element's.
    /// Viewport anchors ignore the element and track the raw scroll position.
    pub fn offset(self, element: &Metrics, scroll: &Metrics) -> f64 {
        match self {
            AnchorX::Left => element.x(EdgeX::Left) - scroll.x(EdgeX::Left),
            AnchorX::Center => element.x(EdgeX::Center) - scroll.x(EdgeX::Center),
            AnchorX::Right => element.x(EdgeX::Right) - scroll.x(EdgeX::Right),
            AnchorX::ViewportLeft => -scroll.x(EdgeX::Left),
            AnchorX::ViewportCenter => -scroll.x(EdgeX::Center),
            AnchorX::ViewportRight => -scroll.x(EdgeX::Right),
        }
    }
}

impl AnchorY {
    /// Vertical counterpart of [`AnchorX::offset`]
    pub fn offset(self, element: &Metrics, scroll: &Metrics) -> f64 {
        match self {
            AnchorY::Top => element.y(EdgeY::Top) - scroll.y(EdgeY::Top),
            AnchorY::Middle => element.y(EdgeY::Middle) - scroll.y(EdgeY::Middle),
            AnchorY::Bottom => element.y(EdgeY::Bottom) - scroll.y(EdgeY::Bottom),
            AnchorY::ViewportTop => -scroll.y(EdgeY::Top),
            AnchorY::ViewportMiddle => -scroll.y(EdgeY::Middle),
            AnchorY::ViewportBottom => -scroll.y(EdgeY::Bottom),
        }
    }
}

/// Unitless number the way JS `String(number)` prints it for ordinary values
pub fn format_css_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_at(x: f64, y: f64) -> Metrics {
        Metrics::viewport(&Viewport {
            scroll_x: x,
            scroll_y: y,
            width: 600.0,
            height: 400.0,
        })
    }

    #[test]
    fn test_midpoints_are_consistent() {
        let m = scroll_at(100.0, 250.0);
        assert_eq!(m.top, 250.0);
        assert_eq!(m.bottom, 650.0);
        assert_eq!(m.middle, (m.top + m.bottom) / 2.0);
        assert_eq!(m.left, 100.0);
        assert_eq!(m.right, 700.0);
        assert_eq!(m.center, (m.left + m.right) / 2.0);
    }

    #[test]
    fn test_measure_adds_scroll_offset() {
        let scroll = scroll_at(10.0, 1000.0);
        let rect = ClientRect {
            x: 20.0,
            y: -50.0,
            width: 100.0,
            height: 40.0,
        };
        let m = Metrics::measure(&rect, &scroll);
        assert_eq!(m, Metrics::from_bounds(30.0, 950.0, 100.0, 40.0));
    }

    #[test]
    fn test_left_anchor_is_exact_difference() {
        let element = Metrics::from_bounds(123.25, 0.0, 10.0, 10.0);
        let scroll = scroll_at(17.5, 0.0);
        assert_eq!(AnchorX::Left.offset(&element, &scroll), element.left - scroll.left);
    }

    #[test]
    fn test_center_scenario() {
        // element center at 500, window center at 300
        let element = Metrics::from_bounds(450.0, 0.0, 100.0, 10.0);
        let scroll = Metrics::from_bounds(0.0, 0.0, 600.0, 400.0);
        assert_eq!(element.center, 500.0);
        assert_eq!(scroll.center, 300.0);
        assert_eq!(AnchorX::Center.offset(&element, &scroll) * 0.5, 100.0);
    }

    #[test]
    fn test_viewport_anchors_ignore_element() {
        let scroll = scroll_at(40.0, 300.0);
        let near = Metrics::from_bounds(0.0, 0.0, 10.0, 10.0);
        let far = Metrics::from_bounds(5000.0, 9000.0, 10.0, 10.0);

        for anchor in [AnchorX::ViewportLeft, AnchorX::ViewportCenter, AnchorX::ViewportRight] {
            assert_eq!(anchor.offset(&near, &scroll), anchor.offset(&far, &scroll));
        }
        assert_eq!(AnchorX::ViewportCenter.offset(&near, &scroll), -scroll.center);
        assert_eq!(AnchorY::ViewportTop.offset(&far, &scroll), -300.0);
        assert_eq!(AnchorY::ViewportBottom.offset(&far, &scroll), -700.0);
    }

    #[test]
    fn test_vertical_anchors() {
        let scroll = scroll_at(0.0, 100.0);
        let element = Metrics::from_bounds(0.0, 600.0, 10.0, 200.0);
        assert_eq!(AnchorY::Top.offset(&element, &scroll), 500.0);
        assert_eq!(AnchorY::Middle.offset(&element, &scroll), 700.0 - 300.0);
        assert_eq!(AnchorY::Bottom.offset(&element, &scroll), 800.0 - 500.0);
    }

    #[test]
    fn test_vertical_overlap_ignores_horizontal() {
        let window = scroll_at(0.0, 1000.0);
        assert!(!Metrics::from_bounds(0.0, 0.0, 10.0, 999.0).overlaps_vertically(&window));
        assert!(Metrics::from_bounds(0.0, 0.0, 10.0, 1000.0).overlaps_vertically(&window));
        assert!(!Metrics::from_bounds(0.0, 1401.0, 10.0, 10.0).overlaps_vertically(&window));
        assert!(Metrics::from_bounds(99_999.0, 1200.0, 10.0, 10.0).overlaps_vertically(&window));
    }

    #[test]
    fn test_anchor_names() {
        let x: AnchorX = serde_json::from_str("\"viewport-center\"").unwrap();
        assert_eq!(x, AnchorX::ViewportCenter);
        let y: AnchorY = serde_json::from_str("\"middle\"").unwrap();
        assert_eq!(y, AnchorY::Middle);
        assert!(serde_json::from_str::<AnchorX>("\"middle\"").is_err());
    }

    #[test]
    fn test_format_css_number() {
        assert_eq!(format_css_number(100.0), "100");
        assert_eq!(format_css_number(12.5), "12.5");
        assert_eq!(format_css_number(-3.0), "-3");
        assert_eq!(format_css_number(-0.0), "0");
    }
}

//! Tracked parallax entries and the shared scroll metrics
//!
//! The registry is host-independent: targets only need to report their client
//! rect and accept property writes. The browser engine drives it from resize
//! and scroll events.

use super::metrics::{format_css_number, ClientRect, Metrics, Viewport};
use super::options::ParallaxOptions;
use crate::error::Result;

/// Something whose position drives a parallax value
pub trait ParallaxTarget {
    /// Bounding rect relative to the current viewport
    fn client_rect(&self) -> ClientRect;

    /// Write a custom property value
    fn set_property(&self, name: &str, value: &str) -> Result<()>;
}

/// A registered target with its options and last measured geometry
#[derive(Debug)]
pub struct ParallaxEntry<T> {
    pub target: T,
    pub options: ParallaxOptions,
    pub metrics: Metrics,
}

impl<T: ParallaxTarget> ParallaxEntry<T> {
    /// Write this entry's values for the given scroll metrics
    fn position(&self, scroll: &Metrics) {
        if self.options.ignore_outside_viewport && !self.metrics.overlaps_vertically(scroll) {
            return;
        }

        let names = &self.options.css_property_names;
        let anchors = &self.options.anchors;
        if let Some(name) = &names.x {
            let offset = anchors.x.map_or(0.0, |anchor| anchor.offset(&self.metrics, scroll));
            self.write(name, offset);
        }
        if let Some(name) = &names.y {
            let offset = anchors.y.map_or(0.0, |anchor| anchor.offset(&self.metrics, scroll));
            self.write(name, offset);
        }
    }

    fn write(&self, name: &str, offset: f64) {
        let value = format_css_number(offset * self.options.strength);
        if let Err(err) = self.target.set_property(name, &value) {
            log::debug!("failed to set {}: {}", name, err);
        }
    }
}

/// Ordered list of tracked entries sharing one scroll-metrics cache
#[derive(Debug)]
pub struct ParallaxRegistry<T> {
    entries: Vec<ParallaxEntry<T>>,
    scroll: Metrics,
}

impl<T> Default for ParallaxRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            scroll: Metrics::default(),
        }
    }
}

impl<T: ParallaxTarget> ParallaxRegistry<T> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            entries: Vec::new(),
            scroll: Metrics::viewport(&viewport),
        }
    }

    pub fn scroll_metrics(&self) -> &Metrics {
        &self.scroll
    }

    pub fn entries(&self) -> &[ParallaxEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `target`, measure it and write its initial values
    pub fn track(&mut self, target: T, options: ParallaxOptions) {
        for name in [&options.css_property_names.x, &options.css_property_names.y]
            .into_iter()
            .flatten()
        {
            if !name.starts_with("--") {
                log::warn!("parallax property {:?} is not a custom property", name);
            }
        }

        let metrics = Metrics::measure(&target.client_rect(), &self.scroll);
        let entry = ParallaxEntry {
            target,
            options,
            metrics,
        };
        entry.position(&self.scroll);
        self.entries.push(entry);
        log::debug!("tracking parallax entry #{}", self.entries.len());
    }

    /// Replace the scroll metrics without repositioning
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.scroll = Metrics::viewport(&viewport);
    }

    /// Scroll: new window metrics, same element geometry
    pub fn handle_scroll(&mut self, viewport: Viewport) {
        self.set_viewport(viewport);
        self.position_all();
    }

    /// Resize: re-measure every entry, then reposition
    pub fn handle_resize(&mut self) {
        let scroll = self.scroll;
        for entry in &mut self.entries {
            entry.metrics = Metrics::measure(&entry.target.client_rect(), &scroll);
            entry.position(&scroll);
        }
    }

    fn position_all(&self) {
        for entry in &self.entries {
            entry.position(&self.scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::metrics::{AnchorX, AnchorY};
    use super::super::options::{Anchors, PropertyNames};
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Target with a movable client rect that records its writes
    #[derive(Clone, Default)]
    struct Recording {
        rect: Rc<Cell<ClientRect>>,
        writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl Recording {
        fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
            let target = Self::default();
            target.rect.set(ClientRect { x, y, width, height });
            target
        }

        fn take_writes(&self) -> Vec<(String, String)> {
            self.writes.take()
        }
    }

    impl ParallaxTarget for Recording {
        fn client_rect(&self) -> ClientRect {
            self.rect.get()
        }

        fn set_property(&self, name: &str, value: &str) -> Result<()> {
            self.writes.borrow_mut().push((name.to_string(), value.to_string()));
            Ok(())
        }
    }

    fn viewport(scroll_x: f64, scroll_y: f64) -> Viewport {
        Viewport {
            scroll_x,
            scroll_y,
            width: 600.0,
            height: 400.0,
        }
    }

    fn x_only(anchor: AnchorX, strength: f64) -> ParallaxOptions {
        ParallaxOptions {
            anchors: Anchors {
                x: Some(anchor),
                y: None,
            },
            css_property_names: PropertyNames {
                x: Some("--x".into()),
                y: None,
            },
            strength,
            ignore_outside_viewport: true,
        }
    }

    fn write(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_track_writes_default_y_immediately() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        // middle at 300 vs window middle 200
        let target = Recording::at(0.0, 250.0, 100.0, 100.0);
        registry.track(target.clone(), ParallaxOptions::default());

        assert_eq!(registry.len(), 1);
        assert_eq!(target.take_writes(), vec![write("--parallax", "50")]);
    }

    #[test]
    fn test_center_scenario_writes_100() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(450.0, 0.0, 100.0, 50.0);
        registry.track(target.clone(), x_only(AnchorX::Center, 0.5));
        assert_eq!(target.take_writes(), vec![write("--x", "100")]);
    }

    #[test]
    fn test_scroll_repositions_without_remeasuring() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(100.0, 0.0, 50.0, 50.0);
        registry.track(target.clone(), x_only(AnchorX::Left, 1.0));
        target.take_writes();

        // The element moves in the document but no resize happens
        target.rect.set(ClientRect {
            x: 900.0,
            y: 0.0,
            width: 50.0,
            height: 50.0,
        });
        registry.handle_scroll(viewport(30.0, 0.0));

        assert_eq!(registry.entries()[0].metrics.left, 100.0);
        assert_eq!(target.take_writes(), vec![write("--x", "70")]);
    }

    #[test]
    fn test_resize_remeasures_every_entry() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 100.0));
        let a = Recording::at(0.0, 0.0, 10.0, 10.0);
        let b = Recording::at(0.0, 50.0, 10.0, 10.0);
        registry.track(a.clone(), x_only(AnchorX::Left, 1.0));
        registry.track(b.clone(), x_only(AnchorX::Left, 1.0));
        a.take_writes();
        b.take_writes();

        a.rect.set(ClientRect {
            x: 40.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        });
        registry.handle_resize();

        let entries = registry.entries();
        assert_eq!(entries[0].metrics.left, 40.0);
        assert_eq!(entries[0].metrics.top, 100.0);
        assert_eq!(entries[1].metrics.top, 150.0);
        assert_eq!(a.take_writes(), vec![write("--x", "40")]);
        assert_eq!(b.take_writes(), vec![write("--x", "0")]);
    }

    #[test]
    fn test_viewport_anchor_independent_of_element_position() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(10.0, 10.0, 10.0, 10.0);
        registry.track(target.clone(), x_only(AnchorX::ViewportCenter, 1.0));
        target.take_writes();

        registry.handle_scroll(viewport(100.0, 0.0));
        let before = target.take_writes();

        target.rect.set(ClientRect {
            x: 5000.0,
            y: 10.0,
            width: 10.0,
            height: 10.0,
        });
        registry.handle_resize();
        registry.handle_scroll(viewport(100.0, 0.0));
        let after = target.take_writes();

        assert_eq!(before, vec![write("--x", "-400")]);
        assert_eq!(after.last(), before.last());
    }

    #[test]
    fn test_ignore_outside_viewport_skips_writes_above_window() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(0.0, 0.0, 10.0, 100.0);
        registry.track(target.clone(), ParallaxOptions::default());
        target.take_writes();

        // bottom is 100, window now starts at 500
        registry.handle_scroll(viewport(0.0, 500.0));
        assert!(target.take_writes().is_empty());

        registry.handle_scroll(viewport(0.0, 50.0));
        assert_eq!(target.take_writes().len(), 1);
    }

    #[test]
    fn test_ignore_outside_viewport_disabled_still_writes() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(0.0, 0.0, 10.0, 100.0);
        let options = ParallaxOptions {
            ignore_outside_viewport: false,
            ..ParallaxOptions::default()
        };
        registry.track(target.clone(), options);
        target.take_writes();

        registry.handle_scroll(viewport(0.0, 500.0));
        // middle 50 vs window middle 700
        assert_eq!(target.take_writes(), vec![write("--parallax", "-325")]);
    }

    #[test]
    fn test_horizontal_position_not_culled() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(10_000.0, 0.0, 10.0, 10.0);
        registry.track(target.clone(), x_only(AnchorX::Left, 1.0));
        assert_eq!(target.take_writes(), vec![write("--x", "10000")]);
    }

    #[test]
    fn test_unset_anchor_writes_zero_and_unset_name_skips() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        let target = Recording::at(0.0, 300.0, 10.0, 10.0);
        let options = ParallaxOptions {
            anchors: Anchors { x: None, y: Some(AnchorY::Top) },
            css_property_names: PropertyNames {
                x: Some("--x".into()),
                y: None,
            },
            ..ParallaxOptions::default()
        };
        registry.track(target.clone(), options);
        assert_eq!(target.take_writes(), vec![write("--x", "0")]);
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let mut registry = ParallaxRegistry::new(viewport(0.0, 0.0));
        for i in 0..5 {
            registry.track(Recording::at(f64::from(i), 0.0, 1.0, 1.0), ParallaxOptions::default());
        }
        let lefts: Vec<f64> = registry.entries().iter().map(|e| e.metrics.left).collect();
        assert_eq!(lefts, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}

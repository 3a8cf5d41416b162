//! Gesture adapters and the per-page controller that routes them.
//!
//! Listeners translate raw DOM events into the small vocabulary here; the
//! controller decides whether a gesture pages, drives the gallery strip, or
//! belongs to a nested scroller.

use log::debug;

use super::gallery::{GalleryOffset, GalleryStep, Viewport};
use super::paginator::{Direction, Paginator};
use crate::config::paging as tuning;

/// Maps a vertical wheel delta to one step, ignoring small trackpad noise.
pub fn wheel_intent(delta_y: f64, threshold: f64) -> Option<Direction> {
    if delta_y.abs() <= threshold {
        None
    } else if delta_y > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

pub fn key_intent(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" | "PageDown" | " " => Some(Direction::Down),
        "ArrowUp" | "PageUp" => Some(Direction::Up),
        _ => None,
    }
}

/// Finger travel between touchstart and touchend. Positive values mean the
/// finger moved up (or left), i.e. the content should advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    pub dx: f64,
    pub dy: f64,
}

impl Swipe {
    pub fn vertical_intent(&self, threshold: f64) -> Option<Direction> {
        wheel_intent(self.dy, threshold)
    }

    /// The delta along whichever axis moved most, for the gallery strip.
    pub fn dominant(&self) -> f64 {
        if self.dx.abs() > self.dy.abs() {
            self.dx
        } else {
            self.dy
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    start: Option<(f64, f64)>,
}

impl TouchTracker {
    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Closes the gesture. A touchend without a matching touchstart yields
    /// nothing.
    pub fn end(&mut self, x: f64, y: f64) -> Option<Swipe> {
        let (sx, sy) = self.start.take()?;
        Some(Swipe { dx: sx - x, dy: sy - y })
    }
}

/// Whether a nested scroller can still move in each direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEdges {
    pub at_top: bool,
    pub at_bottom: bool,
}

impl ScrollEdges {
    pub fn from_metrics(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            at_top: scroll_top <= tuning::EDGE_SLACK_PX,
            at_bottom: scroll_top + client_height >= scroll_height - tuning::EDGE_SLACK_PX,
        }
    }

    fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.at_top,
            Direction::Down => self.at_bottom,
        }
    }
}

/// How a section treats incoming gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Plain,
    /// Wheel and swipes drive the horizontal strip before paging.
    Gallery,
    /// Has its own scroller; paging only happens from its edges.
    Nested,
}

/// Result of routing one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routed {
    Section(usize),
    Gallery(f64),
    /// Swallowed: below threshold, locked, or out of bounds.
    Dropped,
    /// Left to the browser so a nested scroller can move.
    Native,
}

impl Routed {
    /// Whether the listener should call `prevent_default`.
    pub fn consumes_event(&self) -> bool {
        !matches!(self, Routed::Native)
    }

    pub fn changed(&self) -> bool {
        matches!(self, Routed::Section(_) | Routed::Gallery(_))
    }
}

/// Everything one paged page instance owns.
#[derive(Clone, Debug, PartialEq)]
pub struct PageController {
    pager: Paginator,
    gallery: GalleryOffset,
    sections: Vec<SectionKind>,
    wheel_threshold: f64,
    touch_threshold: f64,
}

impl PageController {
    pub fn new(sections: Vec<SectionKind>, viewport: Viewport) -> Self {
        Self::with_parts(
            Paginator::new(sections.len()),
            GalleryOffset::new(viewport),
            sections,
        )
    }

    pub fn with_parts(pager: Paginator, gallery: GalleryOffset, sections: Vec<SectionKind>) -> Self {
        Self {
            pager,
            gallery,
            sections,
            wheel_threshold: tuning::WHEEL_THRESHOLD,
            touch_threshold: tuning::TOUCH_THRESHOLD,
        }
    }

    pub fn current(&self) -> usize {
        self.pager.current()
    }

    pub fn total(&self) -> usize {
        self.pager.total()
    }

    pub fn gallery_offset(&self) -> f64 {
        self.gallery.offset()
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.pager.is_locked(now_ms)
    }

    pub fn locked_until(&self) -> Option<f64> {
        self.pager.locked_until()
    }

    pub fn release(&mut self, now_ms: f64) {
        self.pager.release(now_ms);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.gallery.set_viewport(viewport);
    }

    pub fn current_kind(&self) -> SectionKind {
        self.sections
            .get(self.pager.current())
            .copied()
            .unwrap_or(SectionKind::Plain)
    }

    /// Dot indicator click.
    pub fn go_to(&mut self, index: usize, now_ms: f64) -> Routed {
        let moved = self.pager.navigate_to(index, now_ms);
        self.settle(moved)
    }

    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64, edges: Option<ScrollEdges>, now_ms: f64) -> Routed {
        if self.current_kind() == SectionKind::Gallery {
            let delta = if delta_x.abs() > delta_y.abs() { delta_x } else { delta_y };
            return self.drive_gallery(delta, now_ms);
        }
        match wheel_intent(delta_y, self.wheel_threshold) {
            Some(direction) => self.step(direction, edges, now_ms),
            None => self.passthrough_or_drop(edges),
        }
    }

    pub fn on_key(&mut self, key: &str, edges: Option<ScrollEdges>, now_ms: f64) -> Routed {
        match key_intent(key) {
            Some(direction) => self.step(direction, edges, now_ms),
            None => Routed::Native,
        }
    }

    pub fn on_swipe(&mut self, swipe: Swipe, edges: Option<ScrollEdges>, now_ms: f64) -> Routed {
        if self.current_kind() == SectionKind::Gallery {
            let delta = swipe.dominant();
            // Taps and jitter must reach the browser as clicks.
            if delta.abs() <= self.touch_threshold {
                return Routed::Dropped;
            }
            return self.drive_gallery(delta, now_ms);
        }
        match swipe.vertical_intent(self.touch_threshold) {
            Some(direction) => self.step(direction, edges, now_ms),
            None => self.passthrough_or_drop(edges),
        }
    }

    fn step(&mut self, direction: Direction, edges: Option<ScrollEdges>, now_ms: f64) -> Routed {
        if self.current_kind() == SectionKind::Nested {
            // A section without a probed scroller behaves as if pinned at both edges.
            let edges = edges.unwrap_or(ScrollEdges { at_top: true, at_bottom: true });
            if !edges.allows(direction) {
                return Routed::Native;
            }
        }
        let moved = self.pager.navigate(direction, now_ms);
        self.settle(moved)
    }

    fn drive_gallery(&mut self, delta: f64, now_ms: f64) -> Routed {
        let before = self.gallery.offset();
        match self.gallery.scroll(delta) {
            GalleryStep::Scrolled(offset) if offset == before => Routed::Dropped,
            GalleryStep::Scrolled(offset) => Routed::Gallery(offset),
            GalleryStep::Exit(direction) => {
                debug!("gallery edge reached, paging {:?}", direction);
                let moved = self.pager.navigate(direction, now_ms);
                self.settle(moved)
            }
        }
    }

    fn passthrough_or_drop(&self, edges: Option<ScrollEdges>) -> Routed {
        if self.current_kind() == SectionKind::Nested && edges.is_some() {
            Routed::Native
        } else {
            Routed::Dropped
        }
    }

    fn settle(&mut self, moved: Option<usize>) -> Routed {
        match moved {
            Some(index) => {
                self.gallery.reset();
                Routed::Section(index)
            }
            None => Routed::Dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COOLDOWN: f64 = 1000.0;

    fn controller(sections: Vec<SectionKind>) -> PageController {
        PageController::with_parts(
            Paginator::with_cooldown(sections.len(), COOLDOWN),
            GalleryOffset::with_bounds(-200.0, 1.0),
            sections,
        )
    }

    fn plain(n: usize) -> PageController {
        controller(vec![SectionKind::Plain; n])
    }

    #[test]
    fn wheel_below_threshold_has_no_intent() {
        assert_eq!(wheel_intent(12.0, 30.0), None);
        assert_eq!(wheel_intent(-30.0, 30.0), None);
        assert_eq!(wheel_intent(31.0, 30.0), Some(Direction::Down));
        assert_eq!(wheel_intent(-80.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn keys_map_one_to_one() {
        assert_eq!(key_intent("ArrowDown"), Some(Direction::Down));
        assert_eq!(key_intent("PageDown"), Some(Direction::Down));
        assert_eq!(key_intent(" "), Some(Direction::Down));
        assert_eq!(key_intent("ArrowUp"), Some(Direction::Up));
        assert_eq!(key_intent("PageUp"), Some(Direction::Up));
        assert_eq!(key_intent("Enter"), None);
    }

    #[test]
    fn touch_tracker_measures_start_to_end() {
        let mut touch = TouchTracker::default();
        assert_eq!(touch.end(0.0, 0.0), None);

        touch.start(100.0, 400.0);
        let swipe = touch.end(90.0, 300.0);
        assert_eq!(swipe, Some(Swipe { dx: 10.0, dy: 100.0 }));
        assert_eq!(swipe.and_then(|s| s.vertical_intent(50.0)), Some(Direction::Down));

        // The tracker is single-use per gesture.
        assert_eq!(touch.end(0.0, 0.0), None);
    }

    #[test]
    fn short_swipes_are_dropped() {
        let mut c = plain(3);
        let routed = c.on_swipe(Swipe { dx: 0.0, dy: 20.0 }, None, 0.0);
        assert_eq!(routed, Routed::Dropped);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn release_deadline_tracks_the_last_move() {
        let mut c = plain(3);
        assert_eq!(c.locked_until(), None);
        c.go_to(2, 50.0);
        assert_eq!(c.locked_until(), Some(50.0 + COOLDOWN));

        c.release(COOLDOWN);
        assert!(c.is_locked(COOLDOWN));
        c.release(50.0 + COOLDOWN);
        assert_eq!(c.locked_until(), None);
        assert!(!c.is_locked(50.0 + COOLDOWN));
    }

    #[test]
    fn wheel_pages_plain_sections() {
        let mut c = plain(3);
        assert_eq!(c.on_wheel(0.0, 120.0, None, 0.0), Routed::Section(1));
        assert_eq!(c.on_wheel(0.0, 120.0, None, 10.0), Routed::Dropped);
        assert_eq!(c.on_wheel(0.0, -120.0, None, COOLDOWN + 10.0), Routed::Section(0));
    }

    #[test]
    fn nested_section_pages_only_from_its_edges() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Nested, SectionKind::Plain]);
        c.go_to(1, 0.0);
        let now = COOLDOWN;

        let middle = ScrollEdges { at_top: false, at_bottom: false };
        assert_eq!(c.on_wheel(0.0, 100.0, Some(middle), now), Routed::Native);
        assert_eq!(c.on_wheel(0.0, -100.0, Some(middle), now), Routed::Native);
        assert_eq!(c.current(), 1);

        let top = ScrollEdges { at_top: true, at_bottom: false };
        assert_eq!(c.on_key("ArrowDown", Some(top), now), Routed::Native);
        assert_eq!(c.on_key("ArrowUp", Some(top), now), Routed::Section(0));
    }

    #[test]
    fn nested_section_bottom_edge_falls_through_down() {
        let mut c = controller(vec![SectionKind::Nested, SectionKind::Plain]);
        let bottom = ScrollEdges { at_top: false, at_bottom: true };
        assert_eq!(c.on_swipe(Swipe { dx: 0.0, dy: 80.0 }, Some(bottom), 0.0), Routed::Section(1));
    }

    #[test]
    fn small_wheel_in_nested_section_scrolls_natively() {
        let mut c = controller(vec![SectionKind::Nested]);
        let middle = ScrollEdges { at_top: false, at_bottom: false };
        let routed = c.on_wheel(0.0, 5.0, Some(middle), 0.0);
        assert_eq!(routed, Routed::Native);
        assert!(!routed.consumes_event());
    }

    #[test]
    fn gallery_captures_wheel_until_its_edge() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Gallery, SectionKind::Plain]);
        c.go_to(1, 0.0);
        let now = COOLDOWN;

        assert_eq!(c.on_wheel(0.0, 150.0, None, now), Routed::Gallery(-150.0));
        assert_eq!(c.on_wheel(0.0, 150.0, None, now), Routed::Gallery(-200.0));
        assert_eq!(c.current(), 1);

        // One more outward push pages exactly once and rewinds the strip.
        assert_eq!(c.on_wheel(0.0, 10.0, None, now), Routed::Section(2));
        assert_eq!(c.gallery_offset(), 0.0);
        assert_eq!(c.on_wheel(0.0, 10.0, None, now + 1.0), Routed::Dropped);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn gallery_pulled_back_at_start_pages_up() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Gallery]);
        c.go_to(1, 0.0);
        assert_eq!(c.on_swipe(Swipe { dx: -60.0, dy: 0.0 }, None, COOLDOWN), Routed::Section(0));
        assert_eq!(c.gallery_offset(), 0.0);
    }

    #[test]
    fn gallery_keeps_its_offset_when_the_exit_is_locked() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Gallery, SectionKind::Plain]);
        c.go_to(1, 0.0);
        // Still inside the cooldown from entering the gallery.
        assert_eq!(c.on_wheel(0.0, 500.0, None, 100.0), Routed::Gallery(-200.0));
        assert_eq!(c.on_wheel(0.0, 10.0, None, 200.0), Routed::Dropped);
        assert_eq!(c.gallery_offset(), -200.0);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn still_tap_in_gallery_leaves_the_click_alone() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Gallery, SectionKind::Plain]);
        c.go_to(1, 0.0);

        let routed = c.on_swipe(Swipe { dx: 0.0, dy: 0.0 }, None, COOLDOWN + 10.0);
        assert_eq!(routed, Routed::Dropped);
        assert!(!routed.changed());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn jittery_tap_at_gallery_start_does_not_page() {
        let mut c = controller(vec![SectionKind::Plain, SectionKind::Gallery, SectionKind::Plain]);
        c.go_to(1, 0.0);

        let routed = c.on_swipe(Swipe { dx: -2.0, dy: 1.0 }, None, COOLDOWN + 10.0);
        assert_eq!(routed, Routed::Dropped);
        assert_eq!(c.current(), 1);
        assert_eq!(c.gallery_offset(), 0.0);
    }

    #[test]
    fn gallery_scroll_that_cannot_move_is_not_a_change() {
        let mut c = controller(vec![SectionKind::Gallery, SectionKind::Plain]);
        // Inside the cooldown the strip sits at its end and the exit is locked.
        assert_eq!(c.on_wheel(0.0, 500.0, None, 0.0), Routed::Gallery(-200.0));
        let routed = c.on_wheel(0.0, 0.0, None, 10.0);
        assert_eq!(routed, Routed::Dropped);
        assert!(!routed.changed());
    }

    #[test]
    fn horizontal_wheel_drives_the_gallery() {
        let mut c = controller(vec![SectionKind::Gallery, SectionKind::Plain]);
        assert_eq!(c.on_wheel(40.0, 3.0, None, 0.0), Routed::Gallery(-40.0));
    }

    #[test]
    fn unknown_keys_are_left_to_the_browser() {
        let mut c = plain(2);
        assert_eq!(c.on_key("Tab", None, 0.0), Routed::Native);
    }

    #[test]
    fn edges_from_scroller_metrics() {
        assert_eq!(
            ScrollEdges::from_metrics(0.0, 2000.0, 800.0),
            ScrollEdges { at_top: true, at_bottom: false }
        );
        assert_eq!(
            ScrollEdges::from_metrics(1200.0, 2000.0, 800.0),
            ScrollEdges { at_top: false, at_bottom: true }
        );
        // Content shorter than the viewport sits at both edges.
        assert_eq!(
            ScrollEdges::from_metrics(0.0, 500.0, 800.0),
            ScrollEdges { at_top: true, at_bottom: true }
        );
    }
}

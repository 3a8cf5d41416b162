//! Horizontal card strip living inside one paged section.

use super::paginator::Direction;
use crate::config::gallery as tuning;

/// Viewport class the gallery bound is chosen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < tuning::NARROW_BREAKPOINT_PX {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn max_negative_scroll(self) -> f64 {
        match self {
            Viewport::Narrow => tuning::NARROW_MAX_NEGATIVE_SCROLL,
            Viewport::Wide => tuning::WIDE_MAX_NEGATIVE_SCROLL,
        }
    }
}

/// What a gesture did to the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryStep {
    /// The strip moved (or was already pinned) and the gesture is consumed.
    Scrolled(f64),
    /// The strip sits at a bound and the gesture pushes past it; the page
    /// should change section in this direction.
    Exit(Direction),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryOffset {
    offset: f64,
    min_offset: f64,
    sensitivity: f64,
}

impl GalleryOffset {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_bounds(viewport.max_negative_scroll(), tuning::SENSITIVITY)
    }

    pub fn with_bounds(min_offset: f64, sensitivity: f64) -> Self {
        Self {
            offset: 0.0,
            min_offset: min_offset.min(0.0),
            sensitivity,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[cfg(test)]
    pub fn min_offset(&self) -> f64 {
        self.min_offset
    }

    /// Switches the bound after a resize, keeping the offset inside it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.min_offset = viewport.max_negative_scroll();
        self.offset = self.offset.clamp(self.min_offset, 0.0);
    }

    /// Feeds a wheel or swipe delta. Positive deltas move the strip forward
    /// (content slides left), negative deltas move it back.
    ///
    /// An exit leaves the offset untouched: the caller resets it once the
    /// section change has actually been accepted.
    pub fn scroll(&mut self, delta: f64) -> GalleryStep {
        if delta == 0.0 {
            return GalleryStep::Scrolled(self.offset);
        }
        let forward = delta > 0.0;
        if forward && self.offset <= self.min_offset {
            return GalleryStep::Exit(Direction::Down);
        }
        if !forward && self.offset >= 0.0 {
            return GalleryStep::Exit(Direction::Up);
        }
        self.offset = (self.offset - delta * self.sensitivity).clamp(self.min_offset, 0.0);
        GalleryStep::Scrolled(self.offset)
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> GalleryOffset {
        GalleryOffset::with_bounds(-300.0, 1.0)
    }

    #[test]
    fn forward_scroll_clamps_at_the_negative_bound() {
        let mut g = strip();
        assert_eq!(g.scroll(120.0), GalleryStep::Scrolled(-120.0));
        assert_eq!(g.scroll(500.0), GalleryStep::Scrolled(-300.0));
        assert_eq!(g.offset(), -300.0);
    }

    #[test]
    fn backward_scroll_clamps_at_zero() {
        let mut g = strip();
        g.scroll(100.0);
        assert_eq!(g.scroll(-250.0), GalleryStep::Scrolled(0.0));
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn pushing_past_the_end_exits_down_once() {
        let mut g = strip();
        g.scroll(400.0);
        assert_eq!(g.scroll(10.0), GalleryStep::Exit(Direction::Down));
        assert_eq!(g.offset(), -300.0);

        g.reset();
        assert_eq!(g.offset(), 0.0);
        // After the reset the next forward gesture scrolls again.
        assert_eq!(g.scroll(10.0), GalleryStep::Scrolled(-10.0));
    }

    #[test]
    fn pulling_back_at_the_start_exits_up() {
        let mut g = strip();
        assert_eq!(g.scroll(-40.0), GalleryStep::Exit(Direction::Up));
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn offset_never_leaves_its_range() {
        let mut g = strip();
        for delta in [90.0, 90.0, -30.0, 250.0, 250.0, -1000.0, -5.0, 42.0] {
            g.scroll(delta);
            assert!(g.offset() <= 0.0);
            assert!(g.offset() >= g.min_offset());
        }
    }

    #[test]
    fn sensitivity_scales_the_delta() {
        let mut g = GalleryOffset::with_bounds(-1000.0, 2.5);
        assert_eq!(g.scroll(40.0), GalleryStep::Scrolled(-100.0));
    }

    #[test]
    fn viewport_switch_reclamps() {
        let mut g = GalleryOffset::new(Viewport::Narrow);
        g.scroll(2000.0);
        g.set_viewport(Viewport::Wide);
        assert_eq!(g.offset(), Viewport::Wide.max_negative_scroll());
    }

    #[test]
    fn viewport_class_follows_the_breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(1440.0), Viewport::Wide);
        assert!(Viewport::Narrow.max_negative_scroll() < Viewport::Wide.max_negative_scroll());
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut g = strip();
        assert_eq!(g.scroll(0.0), GalleryStep::Scrolled(0.0));
    }
}

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::{use_interval, use_window_scroll, use_window_size};

use super::interpolate::{interpolate, scroll_fraction};
use super::spring::Spring;
use crate::config::spring as tuning;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgress {
    /// Unfiltered fraction, used for discrete readouts like the active dot.
    pub raw: f64,
    /// Spring-smoothed fraction, used for anything that moves.
    pub smoothed: f64,
}

/// Tracks how far the window has scrolled through `container`, smoothing the
/// value with a spring ticked on a fixed interval.
#[hook]
pub fn use_scroll_progress(container: NodeRef) -> ScrollProgress {
    // Subscribing re-renders this component on every window scroll.
    let _ = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let spring = use_mut_ref(Spring::default);
    let update = use_force_update();

    let raw = container
        .cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            scroll_fraction(rect.top(), rect.height(), viewport_height)
        })
        .unwrap_or(0.0);
    spring.borrow_mut().set_target(raw);

    {
        let spring = spring.clone();
        use_interval(
            move || {
                let mut spring = spring.borrow_mut();
                if spring.is_at_rest() {
                    return;
                }
                spring.step(f64::from(tuning::FRAME_MS) / 1000.0);
                drop(spring);
                update.force_update();
            },
            tuning::FRAME_MS,
        );
    }

    let smoothed = spring.borrow().value();
    ScrollProgress { raw, smoothed }
}

/// Filter and camera values for the neon hero, four screens wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeonVisuals {
    pub offset_vw: f64,
    pub hue_deg: f64,
    pub brightness: f64,
    pub camera_deg: f64,
}

const NEON_STOPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

impl NeonVisuals {
    pub fn at(progress: f64) -> Self {
        Self {
            offset_vw: interpolate(progress, &[0.0, 1.0], &[0.0, -300.0]),
            hue_deg: interpolate(progress, &NEON_STOPS, &[0.0, 30.0, 60.0, 90.0, 120.0]),
            brightness: interpolate(progress, &NEON_STOPS, &[1.0, 1.1, 1.2, 1.3, 1.4]),
            camera_deg: interpolate(progress, &[0.0, 1.0], &[0.0, 360.0]),
        }
    }

    pub fn track_style(&self) -> String {
        format!("transform: translateX({:.3}vw);", self.offset_vw)
    }

    pub fn filter_style(&self) -> String {
        format!(
            "filter: brightness({:.3}) hue-rotate({:.2}deg);",
            self.brightness, self.hue_deg
        )
    }
}

/// Horizontal card strip on the services page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripVisuals {
    pub offset_percent: f64,
    pub progress_scale: f64,
}

impl StripVisuals {
    pub fn at(progress: ScrollProgress) -> Self {
        Self {
            offset_percent: interpolate(progress.raw, &[0.0, 0.95], &[1.0, -72.0]),
            progress_scale: progress.raw.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_visuals_span_their_ranges() {
        let start = NeonVisuals::at(0.0);
        assert_eq!(start.offset_vw, 0.0);
        assert_eq!(start.hue_deg, 0.0);
        assert_eq!(start.brightness, 1.0);

        let end = NeonVisuals::at(1.0);
        assert_eq!(end.offset_vw, -300.0);
        assert_eq!(end.hue_deg, 120.0);
        assert_eq!(end.camera_deg, 360.0);
        assert!((end.brightness - 1.4).abs() < 1e-12);
    }

    #[test]
    fn neon_halfway_is_two_screens_in() {
        let mid = NeonVisuals::at(0.5);
        assert_eq!(mid.offset_vw, -150.0);
        assert_eq!(mid.hue_deg, 60.0);
        assert_eq!(mid.track_style(), "transform: translateX(-150.000vw);");
        assert_eq!(mid.filter_style(), "filter: brightness(1.200) hue-rotate(60.00deg);");
    }

    #[test]
    fn strip_reaches_its_end_before_the_container_does() {
        let near_end = StripVisuals::at(ScrollProgress { raw: 0.95, smoothed: 0.9 });
        assert_eq!(near_end.offset_percent, -72.0);
        let start = StripVisuals::at(ScrollProgress { raw: 0.0, smoothed: 0.0 });
        assert_eq!(start.offset_percent, 1.0);
        assert_eq!(start.progress_scale, 0.0);
    }
}

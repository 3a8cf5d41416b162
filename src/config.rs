use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Section transitions and gesture routing are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "Marysville";

// Brand palette shared by every light page
pub mod colors {
    pub const PURPLE: &str = "#7B2D8E";
    pub const VIOLET: &str = "#8B5CF6";
    pub const LIGHT_BLUE: &str = "#5BC0EB";
    pub const NAVY: &str = "#1E3A5F";
    pub const CYAN: &str = "#00ffff";
    pub const MAGENTA: &str = "#ff00ff";
}

/// Tuning for the paged home layout. These are presentation constants,
/// none of them carry correctness semantics.
pub mod paging {
    /// How long a section transition holds the animation lock.
    pub const COOLDOWN_MS: f64 = 1000.0;
    /// Minimum |deltaY| of a wheel event that counts as one step.
    pub const WHEEL_THRESHOLD: f64 = 30.0;
    /// Minimum vertical finger travel between touchstart and touchend.
    pub const TOUCH_THRESHOLD: f64 = 50.0;
    /// Pixels of slack when deciding a nested scroller sits at its edge.
    pub const EDGE_SLACK_PX: f64 = 2.0;
}

pub mod gallery {
    /// Wheel/touch delta to gallery pixels.
    pub const SENSITIVITY: f64 = 1.0;
    pub const NARROW_MAX_NEGATIVE_SCROLL: f64 = -2400.0;
    pub const WIDE_MAX_NEGATIVE_SCROLL: f64 = -1500.0;
    /// Viewports narrower than this use the narrow bound.
    pub const NARROW_BREAKPOINT_PX: f64 = 768.0;
}

pub mod spring {
    pub const STIFFNESS: f64 = 80.0;
    pub const DAMPING: f64 = 25.0;
    pub const REST_DELTA: f64 = 0.001;
    /// Interval between animator frames.
    pub const FRAME_MS: u32 = 16;
    /// Largest time step fed to the integrator in one tick, in seconds.
    pub const MAX_STEP_SECS: f64 = 0.064;
}

//! Scroll-linked visual effects. Nothing here feeds decision logic.

pub mod interpolate;
pub mod scroll;
pub mod spring;

pub use scroll::{use_scroll_progress, NeonVisuals, StripVisuals};

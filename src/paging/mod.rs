//! Full-viewport section paging for the landing layouts.

pub mod gallery;
pub mod gestures;
pub mod hook;
pub mod listener;
pub mod paginator;

pub use gestures::SectionKind;
pub use hook::use_section_pager;

//! Accessibility behaviours for grid-like collections.
//!
//! [`GridSectionAnnouncer`] fills a gap in VoiceOver on macOS, which does not
//! announce when keyboard focus crosses into another section of a grid.

mod section_announcement;

pub use section_announcement::GridSectionAnnouncer;

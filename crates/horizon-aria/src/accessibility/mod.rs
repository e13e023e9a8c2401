//! Accessibility support.
//!
//! Controls describe themselves to assistive technologies through
//! [AccessKit](https://accesskit.dev/) nodes, and speak transient messages
//! through a [`LiveAnnouncer`].
//!
//! # Architecture
//!
//! - [`Accessible`] trait: Implemented by controls to build their AccessKit node
//! - [`AccessibleRole`]: The role subset exposed by this crate
//! - [`LiveRegion`]: Polite and assertive live regions in the accessibility tree
//! - [`DeferredAnnouncer`]: Delays announcements until the current handler returns
//! - [`Platform`] / [`SectionAnnouncementPolicy`]: Screen-reader capability checks
//!
//! # Example
//!
//! ```
//! use accesskit::NodeId;
//! use horizon_aria::accessibility::{LiveAnnouncer, LiveRegion, Politeness};
//!
//! let region = LiveRegion::new(NodeId(1), NodeId(2));
//! region.announce("Saved", Politeness::Polite);
//! assert_eq!(region.latest(Politeness::Polite).as_deref(), Some("Saved"));
//! ```

mod announcer;
mod node;
mod platform;
mod role;

pub use announcer::{Announcement, DeferredAnnouncer, LiveAnnouncer, LiveRegion, Politeness};
pub use node::Accessible;
pub use platform::{Platform, SectionAnnouncementPolicy};
pub use role::AccessibleRole;

//! Horizon Aria - accessible interaction behaviours for Rust widget toolkits.
//!
//! This is the main crate. It re-exports the reactive primitives of
//! `horizon-aria-core` and adds:
//!
//! - [`collection`]: hierarchical collections and focus/selection state
//! - [`grid`]: section announcements while focus moves through a grid
//! - [`accessibility`]: AccessKit nodes, live regions and platform detection
//! - [`color`]: immutable color values
//! - [`widget`]: the [`ColorWheel`](widget::ColorWheel) hue slider
//! - [`i18n`]: embedded message catalogs and a localized formatter
//! - [`config`]: user settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use accesskit::NodeId;
//! use horizon_aria::prelude::*;
//!
//! let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
//! let mut announcer: GridSectionAnnouncer<&str> =
//!     GridSectionAnnouncer::new(region.clone(), "en-US")?.with_policy(true);
//!
//! let mut grid = TreeCollection::new();
//! grid.add_root(CollectionNode::new("s1", NodeType::Section).with_aria_label("Fruits"))?;
//! grid.add_child(&"s1", CollectionNode::new("s1-header", NodeType::Header))?;
//! grid.add_child(&"s1", CollectionNode::new("apple", NodeType::Row))?;
//! grid.add_root(CollectionNode::new("loose", NodeType::Row))?;
//!
//! announcer.evaluate(&grid, Some(&"loose"), true);
//! announcer.evaluate(&grid, Some(&"apple"), true);
//! assert_eq!(region.latest(Politeness::Assertive).as_deref(), Some("Fruits, section, 1 row"));
//! # Ok::<(), horizon_aria::Error>(())
//! ```

pub use horizon_aria_core::*;

pub mod accessibility;
pub mod collection;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod i18n;
pub mod prelude;
pub mod widget;

pub use error::{Error, Result};

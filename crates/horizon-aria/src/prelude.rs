//! Prelude module for Horizon Aria.
//!
//! ```
//! use horizon_aria::prelude::*;
//! ```
//!
//! This provides access to:
//! - Reactive primitives (`Signal`, `Property`, `ConnectionType`)
//! - Collections and focus state (`TreeCollection`, `SelectionManager`)
//! - Announcements (`LiveRegion`, `GridSectionAnnouncer`, `Politeness`)
//! - Color editing (`Color`, `ColorWheel`)

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::property::{Property, ReadOnlyProperty};
pub use crate::signal::{ConnectionId, ConnectionType, Signal};

// ============================================================================
// Collections
// ============================================================================

pub use crate::collection::{
    Collection, CollectionKey, CollectionNode, NodeType, SelectionManager, TreeCollection,
};

// ============================================================================
// Accessibility
// ============================================================================

pub use crate::accessibility::{
    Accessible, AccessibleRole, LiveAnnouncer, LiveRegion, Platform, Politeness,
    SectionAnnouncementPolicy,
};
pub use crate::grid::GridSectionAnnouncer;

// ============================================================================
// Color
// ============================================================================

pub use crate::color::{Color, ColorChannel, ColorFormat, ColorSpace};
pub use crate::widget::{ColorWheel, Key, KeyPressEvent, KeyboardModifiers, PointerEvent, PointerId};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::AriaConfig;
pub use crate::error::{Error, Result};
pub use crate::i18n::LocalizedStringFormatter;

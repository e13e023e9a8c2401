//! Input events delivered to controls.
//!
//! Keyboard events carry a [`Key`] and [`KeyboardModifiers`]. Pointer events
//! identify their source with a [`PointerId`] so that concurrent touches can be
//! tracked independently.

use std::fmt;

use super::geometry::Point;

/// Modifier keys held while a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    /// Cmd on macOS.
    pub control: bool,
    /// Option on macOS.
    pub alt: bool,
    pub meta: bool,
}

impl KeyboardModifiers {
    pub const NONE: Self = Self { shift: false, control: false, alt: false, meta: false };
    pub const SHIFT: Self = Self::NONE.with_shift(true);

    pub const fn with_shift(self, shift: bool) -> Self {
        Self { shift, ..self }
    }

    pub const fn with_control(self, control: bool) -> Self {
        Self { control, ..self }
    }

    /// Whether a command-style modifier is held.
    ///
    /// Shift alone still counts as a plain press for stepping controls.
    pub fn has_command(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// Keys the controls in this crate react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Tab,
    Space,
    Escape,
    /// Anything else.
    Unknown,
}

/// A key going down, including auto-repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Identity of the device contact driving a gesture.
///
/// Each touch gets its own id; the mouse is a single pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The primary mouse.
    Mouse,
    /// A pen or generic pointer, by platform pointer id.
    Pointer(u64),
    /// A touch contact, by platform touch id.
    Touch(u64),
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerId::Mouse => f.write_str("mouse"),
            PointerId::Pointer(id) => write!(f, "pointer#{id}"),
            PointerId::Touch(id) => write!(f, "touch#{id}"),
        }
    }
}

/// The part of a control a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The draggable thumb.
    Thumb,
    /// The track the thumb runs along.
    Track,
}

/// A pointer press, move or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The contact that produced the event.
    pub id: PointerId,
    /// Position in the control's local coordinates.
    pub position: Point,
    /// Part of the control under the pointer at press time.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(id: PointerId, position: Point, target: PointerTarget) -> Self {
        Self { id, position, target }
    }

    /// A mouse event at `(x, y)` over the track.
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::new(PointerId::Mouse, Point::new(x, y), PointerTarget::Track)
    }

    /// A touch event at `(x, y)` over the track.
    pub fn touch(id: u64, x: f32, y: f32) -> Self {
        Self::new(PointerId::Touch(id), Point::new(x, y), PointerTarget::Track)
    }

    /// Set the press target.
    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }
}

//! Interactive controls and their input plumbing.
//!
//! - [`geometry`]: points and rectangles in local coordinates
//! - [`events`]: key and pointer events, with [`PointerId`] identifying each
//!   contact
//! - [`GestureTracker`]: per-pointer drag state
//! - [`ColorWheel`]: a circular hue slider
//!
//! Controls do not paint. The host toolkit forwards input to the `handle_*`
//! methods, reads geometry for drawing and builds accessibility nodes through
//! [`Accessible`](crate::accessibility::Accessible).

pub mod color_wheel;
pub mod events;
pub mod geometry;
pub mod gesture;

pub use color_wheel::ColorWheel;
pub use events::{Key, KeyPressEvent, KeyboardModifiers, PointerEvent, PointerId, PointerTarget};
pub use geometry::{Point, Rect};
pub use gesture::{ActiveGesture, GestureTracker};

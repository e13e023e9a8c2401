//! Per-pointer drag tracking.
//!
//! [`GestureTracker`] keeps one [`ActiveGesture`] for each pointer that is
//! currently pressed, so concurrent touches never read or write each other's
//! state.
//!
//! # Usage
//!
//! ```
//! use horizon_aria::widget::{GestureTracker, Point, PointerId};
//!
//! let mut tracker: GestureTracker<f64> = GestureTracker::new();
//! tracker.begin(PointerId::Touch(1), Point::new(10.0, 0.0), 0.0);
//! tracker.begin(PointerId::Touch(2), Point::new(0.0, 10.0), 0.0);
//!
//! tracker.update(PointerId::Touch(2), Point::new(5.0, 5.0));
//! assert_eq!(tracker.position(PointerId::Touch(1)), Some(Point::new(10.0, 0.0)));
//!
//! let ended = tracker.end(PointerId::Touch(1)).unwrap();
//! assert_eq!(ended.start_position, Point::new(10.0, 0.0));
//! assert_eq!(ended.final_value(), 0.0);
//! assert_eq!(tracker.active_count(), 1);
//! ```

use std::collections::HashMap;

use tracing::debug;

use horizon_aria_core::logging::targets;

use super::events::PointerId;
use super::geometry::Point;

/// State of one pressed pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGesture<V> {
    /// The pointer driving this gesture.
    pub id: PointerId,
    /// Where the press happened.
    pub start_position: Point,
    /// The latest known position.
    pub position: Point,
    /// The value when the press happened.
    pub initial: V,
    /// The last value this gesture committed, if any.
    pub committed: Option<V>,
}

impl<V> ActiveGesture<V> {
    /// Whether the gesture has committed at least one value.
    pub fn has_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// The value this gesture ends with: its last commit, or the press-time
    /// value if it never committed.
    pub fn final_value(self) -> V {
        self.committed.unwrap_or(self.initial)
    }
}

/// Tracks active gestures keyed by [`PointerId`].
///
/// `V` is the value a gesture commits (e.g. a color for a color wheel).
#[derive(Debug)]
pub struct GestureTracker<V> {
    active: HashMap<PointerId, ActiveGesture<V>>,
}

impl<V> Default for GestureTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GestureTracker<V> {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
        }
    }

    /// Starts a gesture for `id` at `position`, remembering `initial` as the
    /// value in effect when the press happened.
    ///
    /// Returns the previous gesture of the same pointer if one was still
    /// active (its release was never delivered).
    pub fn begin(&mut self, id: PointerId, position: Point, initial: V) -> Option<ActiveGesture<V>> {
        let previous = self.active.insert(
            id,
            ActiveGesture {
                id,
                start_position: position,
                position,
                initial,
                committed: None,
            },
        );
        if previous.is_some() {
            debug!(target: targets::GESTURE, pointer = %id, "gesture restarted without release");
        }
        previous
    }

    /// Moves the gesture of `id`. Returns `None` if that pointer has no
    /// active gesture.
    pub fn update(&mut self, id: PointerId, position: Point) -> Option<&mut ActiveGesture<V>> {
        let gesture = self.active.get_mut(&id)?;
        gesture.position = position;
        Some(gesture)
    }

    /// Records a committed value on the gesture of `id`.
    pub fn commit(&mut self, id: PointerId, value: V) {
        if let Some(gesture) = self.active.get_mut(&id) {
            gesture.committed = Some(value);
        }
    }

    /// Ends and removes the gesture of `id`.
    pub fn end(&mut self, id: PointerId) -> Option<ActiveGesture<V>> {
        self.active.remove(&id)
    }

    /// Gets the gesture of `id`.
    pub fn get(&self, id: PointerId) -> Option<&ActiveGesture<V>> {
        self.active.get(&id)
    }

    /// Gets the latest position of `id`.
    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.active.get(&id).map(|g| g.position)
    }

    /// Checks if `id` has an active gesture.
    pub fn is_active(&self, id: PointerId) -> bool {
        self.active.contains_key(&id)
    }

    /// Gets the number of active gestures.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Gets an iterator over active pointer IDs.
    pub fn active_ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.active.keys().copied()
    }

    /// Removes every active gesture and returns them.
    pub fn drain(&mut self) -> Vec<ActiveGesture<V>> {
        self.active.drain().map(|(_, gesture)| gesture).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_update_end() {
        let mut tracker: GestureTracker<i32> = GestureTracker::new();
        assert!(tracker.begin(PointerId::Mouse, Point::new(1.0, 1.0), 0).is_none());
        assert!(tracker.is_active(PointerId::Mouse));

        let gesture = tracker.update(PointerId::Mouse, Point::new(2.0, 3.0)).unwrap();
        assert_eq!(gesture.position, Point::new(2.0, 3.0));
        assert!(!gesture.has_committed());

        tracker.commit(PointerId::Mouse, 5);
        let ended = tracker.end(PointerId::Mouse).unwrap();
        assert_eq!(ended.committed, Some(5));
        assert_eq!(ended.start_position, Point::new(1.0, 1.0));
        assert!(tracker.end(PointerId::Mouse).is_none());
    }

    #[test]
    fn test_unknown_pointer() {
        let mut tracker: GestureTracker<i32> = GestureTracker::new();
        assert!(tracker.update(PointerId::Touch(9), Point::ZERO).is_none());
        tracker.commit(PointerId::Touch(9), 1);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_concurrent_touches_are_isolated() {
        let mut tracker: GestureTracker<i32> = GestureTracker::new();
        tracker.begin(PointerId::Touch(1), Point::new(0.0, 0.0), 0);
        tracker.begin(PointerId::Touch(2), Point::new(50.0, 50.0), 0);

        tracker.update(PointerId::Touch(1), Point::new(10.0, 0.0));
        tracker.commit(PointerId::Touch(1), 10);

        let second = tracker.get(PointerId::Touch(2)).unwrap();
        assert_eq!(second.position, Point::new(50.0, 50.0));
        assert!(!second.has_committed());

        let mut ids: Vec<_> = tracker.active_ids().collect();
        ids.sort_by_key(|id| id.to_string());
        assert_eq!(ids, vec![PointerId::Touch(1), PointerId::Touch(2)]);
    }

    #[test]
    fn test_restart_returns_previous() {
        let mut tracker: GestureTracker<i32> = GestureTracker::new();
        tracker.begin(PointerId::Pointer(1), Point::ZERO, 0);
        tracker.commit(PointerId::Pointer(1), 3);
        let previous = tracker.begin(PointerId::Pointer(1), Point::new(1.0, 1.0), 3).unwrap();
        assert_eq!(previous.committed, Some(3));
        assert_eq!(tracker.drain().len(), 1);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_final_value_falls_back_to_press_time_value() {
        let mut tracker: GestureTracker<i32> = GestureTracker::new();
        tracker.begin(PointerId::Touch(1), Point::ZERO, 7);
        tracker.begin(PointerId::Touch(2), Point::new(5.0, 5.0), 7);
        tracker.commit(PointerId::Touch(2), 42);

        assert_eq!(tracker.end(PointerId::Touch(1)).map(ActiveGesture::final_value), Some(7));
        assert_eq!(tracker.end(PointerId::Touch(2)).map(ActiveGesture::final_value), Some(42));
    }
}

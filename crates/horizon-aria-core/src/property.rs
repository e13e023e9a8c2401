//! Change-detecting state cells.
//!
//! Components keep observable state in a [`Property`] and pair it with a
//! [`Signal`](crate::Signal). `set()` reports whether the stored value really
//! changed, so a component only emits when there is something new to say:
//!
//! ```
//! use horizon_aria_core::{Property, Signal};
//!
//! struct FocusFlag {
//!     focused: Property<bool>,
//!     focus_changed: Signal<bool>,
//! }
//!
//! impl FocusFlag {
//!     fn set_focused(&self, focused: bool) {
//!         if self.focused.set(focused) {
//!             self.focus_changed.emit(focused);
//!         }
//!     }
//! }
//!
//! let flag = FocusFlag { focused: Property::new(false), focus_changed: Signal::new() };
//! flag.set_focused(true);
//! assert!(flag.focused.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value behind a lock that knows when it has changed.
///
/// Shared between threads whenever `T` is `Send + Sync`.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T> Property<T> {
    pub fn new(value: T) -> Self {
        Self { value: RwLock::new(value) }
    }

    /// Borrow the current value for the duration of `read`.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.value.read())
    }

    /// Overwrite the value without comparing it to the current one.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone> Property<T> {
    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: PartialEq> Property<T> {
    /// Store `value` and report whether it differs from what was there.
    ///
    /// Equal values leave the property untouched.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.value.write();
        let changed = *slot != value;
        if changed {
            *slot = value;
        }
        changed
    }

    /// Like [`set`](Self::set), but hands back the displaced value.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut slot = self.value.write();
        (*slot != value).then(|| std::mem::replace(&mut *slot, value))
    }
}

impl<T: Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Property").field(value).finish())
    }
}

/// Borrowed, getter-only access to a [`Property`].
///
/// Lets a component hand out its state without handing out `set()`.
pub struct ReadOnlyProperty<'a, T> {
    source: &'a Property<T>,
}

impl<'a, T> ReadOnlyProperty<'a, T> {
    pub fn new(source: &'a Property<T>) -> Self {
        Self { source }
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        self.source.with(read)
    }
}

impl<T: Clone> ReadOnlyProperty<'_, T> {
    pub fn get(&self) -> T {
        self.source.get()
    }
}

static_assertions::assert_impl_all!(Property<Option<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes_only() {
        let focused_row = Property::new(Some(3_u32));
        assert!(!focused_row.set(Some(3)));
        assert!(focused_row.set(Some(4)));
        assert!(focused_row.set(None));
        assert_eq!(focused_row.get(), None);
    }

    #[test]
    fn test_set_silent_skips_comparison() {
        let hue = Property::new(0.0_f64);
        hue.set_silent(f64::NAN);
        // NaN never compares equal, so a later set always counts as a change.
        assert!(hue.set(f64::NAN));
        assert!(hue.with(|h| h.is_nan()));
    }

    #[test]
    fn test_read_borrows_without_cloning() {
        let title = Property::new(String::from("Inbox"));
        assert_eq!(title.with(String::len), 5);
        assert_eq!(format!("{title:?}"), r#"Property("Inbox")"#);
    }

    #[test]
    fn test_replace_returns_previous() {
        let section = Property::new(1_u32);
        assert_eq!(section.replace(1), None);
        assert_eq!(section.replace(2), Some(1));
        assert_eq!(section.get(), 2);
    }

    #[test]
    fn test_concurrent_writers() {
        let focused = std::sync::Arc::new(Property::new(0_u8));
        let writers: Vec<_> = (1..=4)
            .map(|row| {
                let focused = focused.clone();
                std::thread::spawn(move || focused.set(row))
            })
            .collect();
        for writer in writers {
            writer.join().expect("writer panicked");
        }
        assert!((1..=4).contains(&focused.get()));
    }

    #[test]
    fn test_read_only_view() {
        let section = Property::new(Some("archive".to_string()));
        let view = ReadOnlyProperty::new(&section);
        section.set(Some("inbox".to_string()));
        assert_eq!(view.get().as_deref(), Some("inbox"));
        assert!(view.with(Option::is_some));
    }
}

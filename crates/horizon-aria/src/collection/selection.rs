//! Focus and selection state for collection views.
//!
//! [`SelectionManager`] is owned by the view; accessibility behaviours only
//! read it and react to its [`focus_changed`](SelectionManager::focus_changed)
//! signal.
//!
//! # Example
//!
//! ```
//! use horizon_aria::collection::SelectionManager;
//!
//! let selection = SelectionManager::<u32>::new();
//! selection.focus_changed.connect(|change| {
//!     println!("focus moved to {:?}", change.focused_key);
//! });
//!
//! selection.set_focused(true);
//! selection.set_focused_key(Some(7));
//! assert_eq!(selection.focused_item_key(), Some(7));
//! ```

use std::collections::HashSet;

use horizon_aria_core::{Property, Signal};
use parking_lot::RwLock;

use super::traits::CollectionKey;

/// Selection behavior mode for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No items can be selected.
    None,
    /// Only one item can be selected at a time (default).
    #[default]
    Single,
    /// Any number of items can be selected.
    Multiple,
}

/// Payload of [`SelectionManager::focus_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange<K> {
    /// The key holding keyboard focus within the collection, if any.
    pub focused_key: Option<K>,
    /// Whether the collection itself currently has focus.
    pub is_focused: bool,
}

/// Tracks the focused key, the focus-within flag and the selected keys of a
/// collection view.
pub struct SelectionManager<K: CollectionKey> {
    focused_key: Property<Option<K>>,
    focused: Property<bool>,
    selected: RwLock<HashSet<K>>,
    selection_mode: SelectionMode,

    /// Emitted whenever the focused key or the focus-within flag changes.
    pub focus_changed: Signal<FocusChange<K>>,

    /// Emitted with the full set of selected keys after every selection change.
    pub selection_changed: Signal<Vec<K>>,
}

impl<K: CollectionKey> Default for SelectionManager<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CollectionKey> SelectionManager<K> {
    /// Create a manager with nothing focused or selected.
    pub fn new() -> Self {
        Self {
            focused_key: Property::new(None),
            focused: Property::new(false),
            selected: RwLock::new(HashSet::new()),
            selection_mode: SelectionMode::default(),
            focus_changed: Signal::new(),
            selection_changed: Signal::new(),
        }
    }

    /// Set the selection mode using builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The key holding keyboard focus, whether or not the view is focused.
    pub fn focused_key(&self) -> Option<K> {
        self.focused_key.get()
    }

    /// Whether focus is within the collection.
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    /// The focused key, but only while the collection actually has focus.
    pub fn focused_item_key(&self) -> Option<K> {
        if self.is_focused() {
            self.focused_key()
        } else {
            None
        }
    }

    /// Move keyboard focus to `key`.
    pub fn set_focused_key(&self, key: Option<K>) {
        if self.focused_key.set(key) {
            self.emit_focus_changed();
        }
    }

    /// Mark the collection as focused or blurred.
    pub fn set_focused(&self, focused: bool) {
        if self.focused.set(focused) {
            self.emit_focus_changed();
        }
    }

    fn emit_focus_changed(&self) {
        self.focus_changed.emit(FocusChange {
            focused_key: self.focused_key(),
            is_focused: self.is_focused(),
        });
    }

    /// Whether `key` is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.read().contains(key)
    }

    /// The selected keys, in no particular order.
    pub fn selected_keys(&self) -> Vec<K> {
        self.selected.read().iter().cloned().collect()
    }

    /// Select `key`, honoring the selection mode.
    pub fn select(&self, key: K) {
        let changed = {
            let mut selected = self.selected.write();
            match self.selection_mode {
                SelectionMode::None => false,
                SelectionMode::Single => {
                    if selected.len() == 1 && selected.contains(&key) {
                        false
                    } else {
                        selected.clear();
                        selected.insert(key)
                    }
                }
                SelectionMode::Multiple => selected.insert(key),
            }
        };
        if changed {
            self.selection_changed.emit(self.selected_keys());
        }
    }

    /// Toggle the selection state of `key`.
    pub fn toggle(&self, key: K) {
        if self.is_selected(&key) {
            self.selected.write().remove(&key);
            self.selection_changed.emit(self.selected_keys());
        } else {
            self.select(key);
        }
    }

    /// Deselect everything.
    pub fn clear_selection(&self) {
        let changed = {
            let mut selected = self.selected.write();
            let had_any = !selected.is_empty();
            selected.clear();
            had_any
        };
        if changed {
            self.selection_changed.emit(Vec::new());
        }
    }
}

//! Hierarchical collections and focus/selection state.
//!
//! Grid-like views (tables, sectioned lists) are backed by a [`Collection`]:
//! a flat key → node index in which every node records the key of its parent.
//! Nodes never point at each other directly, so there are no ownership cycles
//! and a malformed parent chain can only ever degrade lookups, never corrupt
//! memory.
//!
//! # Core Types
//!
//! - [`CollectionNode`]: One section, header, row, item or cell
//! - [`NodeType`]: The structural role of a node
//! - [`Collection`]: Read-only traversal used by the accessibility behaviours
//! - [`TreeCollection`]: An indexed, mutable implementation
//! - [`SelectionManager`]: Focused key, focus-within flag and selected keys
//!
//! # Example
//!
//! ```
//! use horizon_aria::collection::{Collection, CollectionNode, NodeType, TreeCollection};
//!
//! let mut collection = TreeCollection::new();
//! collection.add_root(CollectionNode::new("fruits", NodeType::Section).with_aria_label("Fruits"))?;
//! collection.add_child(&"fruits", CollectionNode::new("apple", NodeType::Row))?;
//!
//! let section = collection.enclosing_section(&"apple").expect("apple is in a section");
//! assert_eq!(section.key(), &"fruits");
//! # Ok::<(), horizon_aria::collection::CollectionError>(())
//! ```

mod node;
mod selection;
mod traits;
mod tree;

pub use node::{CollectionNode, NodeType};
pub use selection::{FocusChange, SelectionManager, SelectionMode};
pub use traits::{Ancestors, Collection, CollectionKey};
pub use tree::TreeCollection;

/// Errors raised by the mutation API of [`TreeCollection`].
///
/// Read paths never fail: lookups of unknown keys simply return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A node with this key already exists.
    #[error("Duplicate collection key {0}")]
    DuplicateKey(String),

    /// The requested parent key does not exist.
    #[error("Unknown parent key {0}")]
    UnknownParent(String),
}

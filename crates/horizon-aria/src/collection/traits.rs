//! The read-only collection abstraction.

use std::fmt;
use std::hash::Hash;

use horizon_aria_core::logging::targets;

use super::node::CollectionNode;

/// Bounds required of collection keys.
///
/// Keys are cloned into focus state and signals, so they must be cheap to
/// clone and shareable across threads.
pub trait CollectionKey: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> CollectionKey for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// A hierarchical collection of nodes, addressed by key.
///
/// Implementors only have to provide lookup, child enumeration and document
/// order; ancestor traversal and key navigation are derived from those.
pub trait Collection {
    /// The key type identifying nodes.
    type Key: CollectionKey;

    /// Look up a node by key.
    fn item(&self, key: &Self::Key) -> Option<&CollectionNode<Self::Key>>;

    /// The direct children of a node, in order. Unknown keys have no children.
    fn child_nodes(&self, key: &Self::Key) -> Vec<&CollectionNode<Self::Key>>;

    /// Total number of nodes in the collection.
    fn size(&self) -> usize;

    /// All keys in document (depth-first, pre-order) order.
    fn keys(&self) -> Vec<Self::Key>;

    /// The first key in document order.
    fn first_key(&self) -> Option<Self::Key> {
        self.keys().into_iter().next()
    }

    /// The last key in document order.
    fn last_key(&self) -> Option<Self::Key> {
        self.keys().into_iter().last()
    }

    /// The key preceding `key` in document order.
    fn key_before(&self, key: &Self::Key) -> Option<Self::Key> {
        let keys = self.keys();
        let pos = keys.iter().position(|k| k == key)?;
        pos.checked_sub(1).map(|prev| keys[prev].clone())
    }

    /// The key following `key` in document order.
    fn key_after(&self, key: &Self::Key) -> Option<Self::Key> {
        let keys = self.keys();
        let pos = keys.iter().position(|k| k == key)?;
        keys.get(pos + 1).cloned()
    }

    /// Iterate over the ancestors of `key`, nearest first.
    ///
    /// The walk stops at the root, at a dangling parent key, or after
    /// [`size()`](Self::size) steps, so a cyclic chain from a faulty
    /// implementation still terminates.
    fn ancestors<'a>(&'a self, key: &Self::Key) -> Ancestors<'a, Self>
    where
        Self: Sized,
    {
        Ancestors {
            collection: self,
            next: self.item(key).and_then(|node| node.parent_key().cloned()),
            remaining: self.size(),
        }
    }

    /// The nearest ancestor of `key` that is a section.
    fn enclosing_section(&self, key: &Self::Key) -> Option<&CollectionNode<Self::Key>>
    where
        Self: Sized,
    {
        self.ancestors(key).find(|node| node.is_section())
    }
}

/// Iterator over a node's ancestors. Created by [`Collection::ancestors`].
pub struct Ancestors<'a, C: Collection> {
    collection: &'a C,
    next: Option<C::Key>,
    remaining: usize,
}

impl<'a, C: Collection> Iterator for Ancestors<'a, C> {
    type Item = &'a CollectionNode<C::Key>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next.take()?;
        if self.remaining == 0 {
            tracing::debug!(target: targets::COLLECTION, ?key, "ancestor chain exceeds collection size, stopping");
            return None;
        }
        self.remaining -= 1;

        let node = self.collection.item(&key)?;
        self.next = node.parent_key().cloned();
        Some(node)
    }
}

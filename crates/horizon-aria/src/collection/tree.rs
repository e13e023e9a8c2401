//! Indexed hierarchical collection.

use std::collections::HashMap;

use horizon_aria_core::logging::targets;

use super::CollectionError;
use super::node::CollectionNode;
use super::traits::{Collection, CollectionKey};

struct TreeEntry<K> {
    node: CollectionNode<K>,
    children: Vec<K>,
}

/// A mutable collection backed by a key → node index.
///
/// Parents must be inserted before their children, which keeps every parent
/// chain acyclic and rooted.
pub struct TreeCollection<K> {
    nodes: HashMap<K, TreeEntry<K>>,
    roots: Vec<K>,
}

impl<K: CollectionKey> Default for TreeCollection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CollectionKey> TreeCollection<K> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a top-level node.
    pub fn add_root(&mut self, node: CollectionNode<K>) -> Result<&CollectionNode<K>, CollectionError> {
        self.insert(None, node)
    }

    /// Insert a node as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: &K,
        node: CollectionNode<K>,
    ) -> Result<&CollectionNode<K>, CollectionError> {
        self.insert(Some(parent.clone()), node)
    }

    fn insert(
        &mut self,
        parent: Option<K>,
        mut node: CollectionNode<K>,
    ) -> Result<&CollectionNode<K>, CollectionError> {
        let key = node.key().clone();
        if self.nodes.contains_key(&key) {
            return Err(CollectionError::DuplicateKey(format!("{key:?}")));
        }

        let (index, level) = match &parent {
            Some(parent_key) => {
                let parent_entry = self
                    .nodes
                    .get_mut(parent_key)
                    .ok_or_else(|| CollectionError::UnknownParent(format!("{parent_key:?}")))?;
                let index = parent_entry.children.len();
                parent_entry.children.push(key.clone());
                (index, parent_entry.node.level() + 1)
            }
            None => {
                self.roots.push(key.clone());
                (self.roots.len() - 1, 0)
            }
        };

        tracing::trace!(target: targets::COLLECTION, ?key, ?parent, index, level, "inserted node");
        node.attach(parent, index, level);
        let entry = self.nodes.entry(key).or_insert(TreeEntry {
            node,
            children: Vec::new(),
        });
        Ok(&entry.node)
    }

    /// Remove a node and its whole subtree.
    ///
    /// Returns the removed node, or `None` if the key was unknown. Remaining
    /// siblings are re-indexed.
    pub fn remove(&mut self, key: &K) -> Option<CollectionNode<K>> {
        let parent = self.nodes.get(key)?.node.parent_key().cloned();

        let siblings = match &parent {
            Some(parent_key) => &mut self.nodes.get_mut(parent_key)?.children,
            None => &mut self.roots,
        };
        siblings.retain(|k| k != key);
        let siblings = siblings.clone();
        for (index, sibling) in siblings.iter().enumerate() {
            if let Some(entry) = self.nodes.get_mut(sibling) {
                entry.node.set_index(index);
            }
        }

        let removed = self.remove_subtree(key);
        tracing::trace!(target: targets::COLLECTION, ?key, "removed subtree");
        removed
    }

    fn remove_subtree(&mut self, key: &K) -> Option<CollectionNode<K>> {
        let entry = self.nodes.remove(key)?;
        for child in &entry.children {
            self.remove_subtree(child);
        }
        Some(entry.node)
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    /// Whether the collection has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys of the top-level nodes, in order.
    pub fn root_keys(&self) -> &[K] {
        &self.roots
    }

    fn collect_keys(&self, key: &K, out: &mut Vec<K>) {
        out.push(key.clone());
        if let Some(entry) = self.nodes.get(key) {
            for child in &entry.children {
                self.collect_keys(child, out);
            }
        }
    }
}

impl<K: CollectionKey> Collection for TreeCollection<K> {
    type Key = K;

    fn item(&self, key: &K) -> Option<&CollectionNode<K>> {
        self.nodes.get(key).map(|entry| &entry.node)
    }

    fn child_nodes(&self, key: &K) -> Vec<&CollectionNode<K>> {
        self.nodes
            .get(key)
            .map(|entry| {
                entry
                    .children
                    .iter()
                    .filter_map(|child| self.item(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.collect_keys(root, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::NodeType;

    fn sample() -> TreeCollection<&'static str> {
        let mut collection = TreeCollection::new();
        collection
            .add_root(CollectionNode::new("fruits", NodeType::Section).with_aria_label("Fruits"))
            .unwrap();
        collection
            .add_child(&"fruits", CollectionNode::new("fruits-header", NodeType::Header))
            .unwrap();
        collection
            .add_child(&"fruits", CollectionNode::new("apple", NodeType::Row))
            .unwrap();
        collection
            .add_child(&"apple", CollectionNode::new("apple-name", NodeType::Cell))
            .unwrap();
        collection
            .add_child(&"fruits", CollectionNode::new("banana", NodeType::Row))
            .unwrap();
        collection
            .add_root(CollectionNode::new("veg", NodeType::Section).with_rendered("Vegetables"))
            .unwrap();
        collection
            .add_child(&"veg", CollectionNode::new("carrot", NodeType::Row))
            .unwrap();
        collection
    }

    #[test]
    fn test_structure() {
        let collection = sample();
        assert_eq!(collection.size(), 7);
        assert_eq!(collection.root_keys(), &["fruits", "veg"]);

        let banana = collection.item(&"banana").unwrap();
        assert_eq!(banana.parent_key(), Some(&"fruits"));
        assert_eq!(banana.index(), 2);
        assert_eq!(banana.level(), 1);

        let cell = collection.item(&"apple-name").unwrap();
        assert_eq!(cell.level(), 2);
        assert_eq!(collection.enclosing_section(&"apple-name").unwrap().key(), &"fruits");
    }

    #[test]
    fn test_document_order() {
        let collection = sample();
        assert_eq!(
            collection.keys(),
            vec!["fruits", "fruits-header", "apple", "apple-name", "banana", "veg", "carrot"]
        );
        assert_eq!(collection.key_after(&"banana"), Some("veg"));
    }

    #[test]
    fn test_child_nodes() {
        let collection = sample();
        let children: Vec<_> = collection.child_nodes(&"fruits").iter().map(|n| *n.key()).collect();
        assert_eq!(children, vec!["fruits-header", "apple", "banana"]);
        assert!(collection.child_nodes(&"missing").is_empty());
    }

    #[test]
    fn test_insert_errors() {
        let mut collection = sample();
        assert_eq!(
            collection.add_root(CollectionNode::new("veg", NodeType::Section)).unwrap_err(),
            CollectionError::DuplicateKey("\"veg\"".into())
        );
        assert!(matches!(
            collection.add_child(&"nope", CollectionNode::new("x", NodeType::Row)),
            Err(CollectionError::UnknownParent(_))
        ));
        assert_eq!(collection.size(), 7);
    }

    #[test]
    fn test_remove_subtree_reindexes_siblings() {
        let mut collection = sample();
        let removed = collection.remove(&"apple").unwrap();
        assert_eq!(removed.key(), &"apple");
        assert!(collection.item(&"apple-name").is_none());
        assert_eq!(collection.size(), 5);
        assert_eq!(collection.item(&"banana").unwrap().index(), 1);
        assert!(collection.remove(&"apple").is_none());

        collection.remove(&"fruits");
        assert_eq!(collection.root_keys(), &["veg"]);
        assert_eq!(collection.item(&"veg").unwrap().index(), 0);

        collection.clear();
        assert!(collection.is_empty());
    }
}

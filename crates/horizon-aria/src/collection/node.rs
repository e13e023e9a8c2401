//! Collection nodes.

use std::fmt;

/// The structural role of a node within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// A grouping node whose children are the rows of one section.
    Section,
    /// A header row (e.g. the title row of a section or a column header row).
    Header,
    /// A table or grid row.
    Row,
    /// A list item.
    Item,
    /// A single cell within a row.
    Cell,
}

impl NodeType {
    /// The lowercase name of this node type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Section => "section",
            NodeType::Header => "header",
            NodeType::Row => "row",
            NodeType::Item => "item",
            NodeType::Cell => "cell",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a hierarchical collection.
///
/// The parent relation is a key, not a reference: resolve it through the
/// owning [`Collection`](super::Collection).
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionNode<K> {
    key: K,
    node_type: NodeType,
    parent_key: Option<K>,
    aria_label: Option<String>,
    rendered: Option<String>,
    text_value: String,
    index: usize,
    level: usize,
}

impl<K> CollectionNode<K> {
    /// Create a detached node. Parent, index and level are assigned when the
    /// node is inserted into a collection.
    pub fn new(key: K, node_type: NodeType) -> Self {
        Self {
            key,
            node_type,
            parent_key: None,
            aria_label: None,
            rendered: None,
            text_value: String::new(),
            index: 0,
            level: 0,
        }
    }

    /// Set an explicit accessible label using builder pattern.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Set plain-text rendered content using builder pattern.
    ///
    /// Leave unset when the node renders something other than plain text.
    pub fn with_rendered(mut self, rendered: impl Into<String>) -> Self {
        self.rendered = Some(rendered.into());
        self
    }

    /// Set the text value used for type-ahead and sorting.
    pub fn with_text_value(mut self, text: impl Into<String>) -> Self {
        self.text_value = text.into();
        self
    }

    /// The node's unique key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The node's structural role.
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Whether this node is a section.
    pub fn is_section(&self) -> bool {
        self.node_type == NodeType::Section
    }

    /// Key of the parent node, `None` for roots.
    pub fn parent_key(&self) -> Option<&K> {
        self.parent_key.as_ref()
    }

    /// The explicit accessible label, if any.
    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    /// The plain-text rendered content, if any.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// The text value of this node.
    pub fn text_value(&self) -> &str {
        &self.text_value
    }

    /// Position among the parent's children.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Depth in the hierarchy; roots are level 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The title announced for this node.
    ///
    /// Falls back from the explicit label to the rendered text, then to an
    /// empty string. Empty labels count as absent.
    pub fn accessible_title(&self) -> &str {
        self.aria_label()
            .filter(|label| !label.is_empty())
            .or_else(|| self.rendered().filter(|text| !text.is_empty()))
            .unwrap_or("")
    }

    pub(crate) fn attach(&mut self, parent_key: Option<K>, index: usize, level: usize) {
        self.parent_key = parent_key;
        self.index = index;
        self.level = level;
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Test and adapter hook for building nodes whose parent is managed
    /// outside a [`TreeCollection`](super::TreeCollection).
    pub fn with_parent_key(mut self, parent_key: Option<K>) -> Self {
        self.parent_key = parent_key;
        self
    }
}

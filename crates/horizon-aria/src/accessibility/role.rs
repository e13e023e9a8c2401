//! Accessibility roles.

use accesskit::Role;

use crate::collection::NodeType;

/// The accessibility role of a control or collection node.
///
/// A small set of roles covering what this crate exposes; each maps onto
/// AccessKit's `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// No specific role.
    #[default]
    Unknown,

    /// An interactive grid or table.
    Grid,

    /// A group of rows, e.g. one section of a grid.
    RowGroup,

    /// A row within a grid.
    Row,

    /// A cell within a row.
    Cell,

    /// A column header.
    ColumnHeader,

    /// A list of items.
    List,

    /// An item within a list.
    ListItem,

    /// A control for selecting a value from a range.
    Slider,

    /// A polite live region.
    Status,

    /// An assertive live region.
    Alert,

    /// A generic grouping.
    Group,
}

impl AccessibleRole {
    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Grid => Role::Grid,
            AccessibleRole::RowGroup => Role::RowGroup,
            AccessibleRole::Row => Role::Row,
            AccessibleRole::Cell => Role::Cell,
            AccessibleRole::ColumnHeader => Role::ColumnHeader,
            AccessibleRole::List => Role::List,
            AccessibleRole::ListItem => Role::ListItem,
            AccessibleRole::Slider => Role::Slider,
            AccessibleRole::Status => Role::Status,
            AccessibleRole::Alert => Role::Alert,
            AccessibleRole::Group => Role::Group,
        }
    }
}

impl From<AccessibleRole> for Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

impl From<NodeType> for AccessibleRole {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Section => AccessibleRole::RowGroup,
            NodeType::Header => AccessibleRole::Row,
            NodeType::Row => AccessibleRole::Row,
            NodeType::Item => AccessibleRole::ListItem,
            NodeType::Cell => AccessibleRole::Cell,
        }
    }
}

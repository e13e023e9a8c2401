//! The Accessible trait for exposing controls to assistive technologies.

use accesskit::{Action, Node, NodeId};

use super::role::AccessibleRole;
use crate::widget::geometry::Rect;

/// Trait for controls that provide accessibility information.
///
/// All methods have defaults; implementors override what applies. The
/// resulting AccessKit node is produced by
/// [`build_accessible_node`](Accessible::build_accessible_node).
///
/// # Example
///
/// ```
/// use horizon_aria::accessibility::{Accessible, AccessibleRole};
///
/// struct Volume(f64);
///
/// impl Accessible for Volume {
///     fn accessible_role(&self) -> AccessibleRole {
///         AccessibleRole::Slider
///     }
///
///     fn accessible_numeric_value(&self) -> Option<f64> {
///         Some(self.0)
///     }
/// }
/// ```
pub trait Accessible {
    /// Get the accessibility role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// Get the accessible name, the primary label screen readers announce.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Get the accessible description.
    fn accessible_description(&self) -> Option<String> {
        None
    }

    /// Get the human-readable value text (e.g. "90°").
    fn accessible_value(&self) -> Option<String> {
        None
    }

    /// Get the accessible value as a number.
    fn accessible_numeric_value(&self) -> Option<f64> {
        None
    }

    /// Get the minimum numeric value.
    fn accessible_min_value(&self) -> Option<f64> {
        None
    }

    /// Get the maximum numeric value.
    fn accessible_max_value(&self) -> Option<f64> {
        None
    }

    /// Get the numeric value step.
    fn accessible_value_step(&self) -> Option<f64> {
        None
    }

    /// Check if the control is disabled.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Get the actions supported by this control.
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Get IDs of nodes that label this control.
    fn accessible_labelled_by(&self) -> Vec<NodeId> {
        Vec::new()
    }

    /// Build an AccessKit node from this control's accessibility info.
    fn build_accessible_node(&self, bounds: Rect, children: &[NodeId]) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        node.set_bounds(bounds.into());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }
        if let Some(desc) = self.accessible_description() {
            node.set_description(desc);
        }
        if let Some(value) = self.accessible_value() {
            node.set_value(value);
        }

        if let Some(value) = self.accessible_numeric_value() {
            node.set_numeric_value(value);
        }
        if let Some(min) = self.accessible_min_value() {
            node.set_min_numeric_value(min);
        }
        if let Some(max) = self.accessible_max_value() {
            node.set_max_numeric_value(max);
        }
        if let Some(step) = self.accessible_value_step() {
            node.set_numeric_value_step(step);
        }

        if self.is_accessible_disabled() {
            node.set_disabled();
        }

        for action in self.accessible_actions() {
            node.add_action(action);
        }

        let labelled_by = self.accessible_labelled_by();
        if !labelled_by.is_empty() {
            node.set_labelled_by(labelled_by);
        }

        if !children.is_empty() {
            node.set_children(children.to_vec());
        }

        node
    }
}

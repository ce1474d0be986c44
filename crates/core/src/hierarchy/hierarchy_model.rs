//! Hierarchy tree model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sunburst::Rgba;

/// A node of the portfolio tree.
///
/// Only leaves carry an explicit `value`; every other node's value is the
/// sum of its descendant leaves. Only category nodes (depth 1) carry a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<HierarchyNode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Rgba>,
    /// Id of the position a leaf was built from.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position_id: Option<String>,
}

impl HierarchyNode {
    /// Creates an internal node with no value of its own.
    pub fn group(name: impl Into<String>, children: Vec<HierarchyNode>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children,
            color: None,
            position_id: None,
        }
    }

    pub fn leaf(name: impl Into<String>, value: Decimal, position_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            children: Vec::new(),
            color: None,
            position_id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of all descendant leaf values (the leaf's own value for a leaf).
    ///
    /// An internal node without children and without value counts as zero.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn aggregated_value(&self) -> Decimal {
        if self.is_leaf() {
            return self.value.unwrap_or(Decimal::ZERO);
        }
        self.children
            .iter()
            .map(HierarchyNode::aggregated_value)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::node_count).sum::<usize>()
    }
}

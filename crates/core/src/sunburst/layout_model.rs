//! Sunburst layout models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CANVAS_SIZE, DEFAULT_LABEL_MAX_CHARS, DEFAULT_LABEL_MIN_ANGLE, DEFAULT_PAD_ANGLE,
    DEFAULT_RING_GAP,
};
use crate::errors::{Error, Result};

use super::{LabelLayout, Rgba, TextColor};

/// Index of a node in `SunburstLayout::nodes`.
///
/// Ids are only meaningful for the layout that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Order in which siblings are laid out around their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiblingOrder {
    /// First-seen order from the position list.
    #[default]
    Insertion,
    /// Largest value first; ties keep insertion order.
    ValueDescending,
}

/// Tuning knobs for the partition layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Edge of the square canvas, in pixels.
    pub canvas_size: f64,
    /// Padding between sibling arcs, in radians.
    pub pad_angle: f64,
    /// Pixels trimmed from each ring's outer radius.
    pub ring_gap: f64,
    /// Minimum unpadded arc width (radians) for a label to be drawn.
    pub label_min_angle: f64,
    /// Maximum label length in characters before truncation.
    pub label_max_chars: usize,
    pub sibling_order: SiblingOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            pad_angle: DEFAULT_PAD_ANGLE,
            ring_gap: DEFAULT_RING_GAP,
            label_min_angle: DEFAULT_LABEL_MIN_ANGLE,
            label_max_chars: DEFAULT_LABEL_MAX_CHARS,
            sibling_order: SiblingOrder::Insertion,
        }
    }
}

impl LayoutConfig {
    pub fn with_canvas_size(mut self, canvas_size: f64) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.canvas_size.is_finite() || self.canvas_size <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "canvasSize must be a positive number, got {}",
                self.canvas_size
            )));
        }
        if !self.pad_angle.is_finite() || self.pad_angle < 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "padAngle must be non-negative, got {}",
                self.pad_angle
            )));
        }
        if !self.ring_gap.is_finite() || self.ring_gap < 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "ringGap must be non-negative, got {}",
                self.ring_gap
            )));
        }
        if !self.label_min_angle.is_finite() || self.label_min_angle < 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "labelMinAngle must be non-negative, got {}",
                self.label_min_angle
            )));
        }
        Ok(())
    }
}

/// Drawable arc in pixel space, centered on the canvas middle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcGeometry {
    /// Padded start angle, radians clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// One laid-out node of the sunburst (every node except the synthetic root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub id: NodeId,
    /// `None` for categories, whose parent is the synthetic root.
    pub parent: Option<NodeId>,
    pub depth: usize,
    pub name: String,
    /// Aggregated value of the subtree.
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position_id: Option<String>,
    /// Unpadded partition extent, radians.
    pub angle_start: f64,
    pub angle_end: f64,
    /// Radial band, normalized to `[0, 1]` of the chart radius.
    pub radius_inner: f64,
    pub radius_outer: f64,
    pub arc: ArcGeometry,
    pub fill: Rgba,
    pub text_color: TextColor,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<LabelLayout>,
}

impl LayoutNode {
    /// Unpadded angular width in radians.
    pub fn angular_width(&self) -> f64 {
        self.angle_end - self.angle_start
    }
}

/// Text drawn in the hole of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterLabel {
    pub title: String,
    pub total: String,
}

/// Complete output of the partition engine for one dataset and canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunburstLayout {
    pub root_name: String,
    pub total_value: Decimal,
    pub canvas_size: f64,
    /// Outer radius of the whole chart, in pixels.
    pub radius: f64,
    /// Non-root nodes in pre-order.
    pub nodes: Vec<LayoutNode>,
    pub center_label: CenterLabel,
}

impl SunburstLayout {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// Categories, i.e. the direct children of the synthetic root.
    pub fn top_level(&self) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.nodes.iter().filter(|n| n.parent.is_none())
    }

    /// Proper ancestors of `id`, outermost (category) first. The synthetic
    /// root is never included. Empty for unknown ids.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(parent_id) = current {
            chain.push(parent_id);
            current = self.node(parent_id).and_then(|n| n.parent);
        }
        chain.reverse();
        chain
    }

    /// Share of the portfolio held under `id`, in percent. Zero when the
    /// portfolio total is zero or the id is unknown.
    pub fn percentage_of_total(&self, id: NodeId) -> Decimal {
        match self.node(id) {
            Some(node) if self.total_value > Decimal::ZERO => {
                node.value / self.total_value * dec!(100)
            }
            _ => Decimal::ZERO,
        }
    }
}

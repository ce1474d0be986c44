//! Interaction models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sunburst::{NodeId, Rgba};

const TOOLTIP_OFFSET: f64 = 15.0;
const TOOLTIP_RESERVED_WIDTH: f64 = 250.0;
const TOOLTIP_RESERVED_HEIGHT: f64 = 150.0;

/// Pointer location in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer events delivered by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    /// The pointer entered the arc of `node`.
    Enter {
        node: NodeId,
        pointer: PointerPosition,
    },
    /// The pointer moved within the currently hovered arc.
    Move { pointer: PointerPosition },
    /// The pointer left the canvas.
    Leave,
}

/// Everything known about the hovered arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusState {
    pub hovered: NodeId,
    /// Category down to the hovered node's parent. Excludes the synthetic
    /// root and the hovered node itself.
    pub ancestor_chain: Vec<NodeId>,
    /// Ancestor names joined for display.
    pub breadcrumb: String,
    pub pointer: PointerPosition,
    /// Share of the portfolio under the hovered node, 0-100.
    pub percentage: Decimal,
}

impl FocusState {
    /// Whether `id` is the hovered node or one of its ancestors.
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.hovered == id || self.ancestor_chain.contains(&id)
    }

    /// Highlighted nodes, outermost ancestor first, hovered node last.
    pub fn highlight_set(&self) -> Vec<NodeId> {
        let mut ids = self.ancestor_chain.clone();
        ids.push(self.hovered);
        ids
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum InteractionState {
    #[default]
    Idle,
    Focused(FocusState),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// Per-arc presentation derived from the interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcStyle {
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stroke: Option<Stroke>,
}

/// Content of the hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub name: String,
    pub breadcrumb: String,
    pub value: Decimal,
    pub formatted_value: String,
    pub percentage: Decimal,
    pub formatted_percentage: String,
    pub pointer: PointerPosition,
}

/// Positions the tooltip box next to the pointer without leaving the viewport.
pub struct TooltipPlacement;

impl TooltipPlacement {
    pub fn place(pointer: PointerPosition, viewport_width: f64, viewport_height: f64) -> PointerPosition {
        PointerPosition {
            x: (pointer.x + TOOLTIP_OFFSET).min(viewport_width - TOOLTIP_RESERVED_WIDTH),
            y: (pointer.y + TOOLTIP_OFFSET).min(viewport_height - TOOLTIP_RESERVED_HEIGHT),
        }
    }
}

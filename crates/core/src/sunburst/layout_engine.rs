//! Radial partition ("sunburst") layout.
//!
//! Each tree depth gets one ring; each node gets an angular span
//! proportional to its aggregated value within its parent's span.

use std::f64::consts::TAU;

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{INSTRUMENT_RING_OPACITY, ROOT_NODE_NAME, STYLE_RING_OPACITY};
use crate::hierarchy::HierarchyNode;
use crate::positions::category_color;
use crate::utils::format::format_currency;

use super::labels::fit_label;
use super::{
    ArcGeometry, CenterLabel, LayoutConfig, LayoutNode, NodeId, Rgba, SiblingOrder,
    SunburstLayout,
};

/// Splits `[start, end]` among children in order, proportionally to
/// `values`.
///
/// A zero-valued parent splits its span equally so no NaN can appear.
/// Spans are computed from cumulative sums, so children are contiguous and
/// the last one ends exactly at `end`.
pub fn partition_span(
    start: f64,
    end: f64,
    parent_value: Decimal,
    values: &[Decimal],
) -> Vec<(f64, f64)> {
    let span = end - start;
    let count = values.len();

    if parent_value <= Decimal::ZERO {
        let width = span / count as f64;
        return (0..count)
            .map(|i| {
                let s = start + width * i as f64;
                let e = if i + 1 == count {
                    end
                } else {
                    start + width * (i + 1) as f64
                };
                (s, e)
            })
            .collect();
    }

    let fraction = |part: Decimal| -> f64 { (part / parent_value).to_f64().unwrap_or(0.0) };

    let mut spans = Vec::with_capacity(count);
    let mut cumulative = Decimal::ZERO;
    let mut cursor = start;
    for value in values {
        cumulative = cumulative.saturating_add(*value);
        let e = if cumulative == parent_value {
            end
        } else {
            start + span * fraction(cumulative)
        };
        spans.push((cursor, e));
        cursor = e;
    }
    spans
}

/// Shrinks an arc by the padding on each side, never past its midpoint.
pub fn pad_arc(start: f64, end: f64, pad_angle: f64) -> (f64, f64) {
    let inset = ((end - start) / 2.0).min(pad_angle).max(0.0);
    let padded_start = start + inset;
    (padded_start, (end - inset).max(padded_start))
}

struct LayoutContext<'a> {
    config: &'a LayoutConfig,
    bands: f64,
    radius: f64,
    nodes: Vec<LayoutNode>,
}

impl LayoutContext<'_> {
    /// Fill for a node: categories use their own color, deeper rings reuse
    /// the category color found by walking up the parent links.
    fn resolve_fill(&self, node: &HierarchyNode, depth: usize, parent: Option<NodeId>) -> Rgba {
        if depth <= 1 {
            return node.color.unwrap_or_else(|| category_color(&node.name));
        }

        let mut ancestor = parent.and_then(|id| self.nodes.get(id.0));
        while let Some(current) = ancestor {
            if current.depth == 1 {
                break;
            }
            ancestor = current.parent.and_then(|id| self.nodes.get(id.0));
        }

        let base = ancestor
            .map(|category| category.fill)
            .unwrap_or_else(|| category_color(&node.name));

        let opacity = if depth == 2 {
            STYLE_RING_OPACITY
        } else {
            INSTRUMENT_RING_OPACITY
        };
        base.with_opacity(opacity)
    }

    fn place_children(
        &mut self,
        parent: &HierarchyNode,
        parent_id: Option<NodeId>,
        depth: usize,
        span: (f64, f64),
        parent_value: Decimal,
    ) {
        let mut children: Vec<(&HierarchyNode, Decimal)> = parent
            .children
            .iter()
            .map(|c| (c, c.aggregated_value()))
            .collect();
        if children.is_empty() {
            return;
        }

        if self.config.sibling_order == SiblingOrder::ValueDescending {
            // stable, so equal values keep insertion order
            children.sort_by(|a, b| b.1.cmp(&a.1));
        }

        let values: Vec<Decimal> = children.iter().map(|(_, v)| *v).collect();
        let spans = partition_span(span.0, span.1, parent_value, &values);

        let radius_inner = depth as f64 / self.bands;
        let radius_outer = (depth + 1) as f64 / self.bands;
        let inner_px = radius_inner * self.radius;
        let outer_px = (radius_outer * self.radius - self.config.ring_gap).max(inner_px);

        for ((child, value), (angle_start, angle_end)) in children.into_iter().zip(spans) {
            let id = NodeId(self.nodes.len());
            let fill = self.resolve_fill(child, depth, parent_id);
            let (arc_start, arc_end) = pad_arc(angle_start, angle_end, self.config.pad_angle);

            let label = fit_label(
                &child.name,
                depth,
                angle_start,
                angle_end,
                (radius_inner + radius_outer) / 2.0 * self.radius,
                self.config.label_min_angle,
                self.config.label_max_chars,
            );

            self.nodes.push(LayoutNode {
                id,
                parent: parent_id,
                depth,
                name: child.name.clone(),
                value,
                position_id: child.position_id.clone(),
                angle_start,
                angle_end,
                radius_inner,
                radius_outer,
                arc: ArcGeometry {
                    start_angle: arc_start,
                    end_angle: arc_end,
                    inner_radius: inner_px,
                    outer_radius: outer_px,
                },
                fill,
                text_color: fill.contrasting_text(),
                label,
            });

            self.place_children(child, Some(id), depth + 1, (angle_start, angle_end), value);
        }
    }
}

/// Lays out the hierarchy as a sunburst on a square canvas.
///
/// Pure function of its inputs. An empty tree yields an empty layout; a
/// zero-total tree yields every node with a zero span at angle 0.
/// Negative values are not checked and produce negative spans.
pub fn compute_layout(root: &HierarchyNode, config: &LayoutConfig) -> SunburstLayout {
    let total_value = root.aggregated_value();
    let radius = config.canvas_size / 2.0;
    let root_span = if total_value > Decimal::ZERO { TAU } else { 0.0 };

    let mut ctx = LayoutContext {
        config,
        bands: (root.height() + 1) as f64,
        radius,
        nodes: Vec::with_capacity(root.node_count().saturating_sub(1)),
    };
    ctx.place_children(root, None, 1, (0.0, root_span), total_value);

    debug!(
        "Computed sunburst layout: {} nodes, total {}, canvas {}px",
        ctx.nodes.len(),
        total_value,
        config.canvas_size
    );

    let root_name = if root.name.is_empty() {
        ROOT_NODE_NAME.to_string()
    } else {
        root.name.clone()
    };

    SunburstLayout {
        center_label: CenterLabel {
            title: root_name.clone(),
            total: format_currency(total_value),
        },
        root_name,
        total_value,
        canvas_size: config.canvas_size,
        radius,
        nodes: ctx.nodes,
    }
}

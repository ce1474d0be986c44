//! Property-based tests for the hierarchy builder and the sunburst layout.
//!
//! These check that the aggregation and partition invariants hold for
//! arbitrary position lists, using `proptest` for input generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::f64::consts::TAU;
use wealthspectrum_core::hierarchy::{build_hierarchy, HierarchyNode};
use wealthspectrum_core::interaction::{PointerEvent, PointerPosition, SunburstInteraction};
use wealthspectrum_core::positions::Position;
use wealthspectrum_core::sunburst::{compute_layout, LayoutConfig, SunburstLayout};

const EPS: f64 = 1e-9;

// =============================================================================
// Generators
// =============================================================================

/// Generates a position from small label pools so groups actually collide.
fn arb_position() -> impl Strategy<Value = (String, String, String, Decimal)> {
    (
        prop::sample::select(vec!["A股市场", "海外市场/QDII", "债券/固收", "加密货币"]),
        prop::sample::select(vec!["科技", "消费", "医药", "利率债"]),
        "[a-z]{1,20}",
        0u64..10_000_000, // cents
    )
        .prop_map(|(category, style, name, cents)| {
            (
                category.to_string(),
                style.to_string(),
                name,
                Decimal::new(cents as i64, 2),
            )
        })
}

fn arb_positions(max_count: usize) -> impl Strategy<Value = Vec<Position>> {
    proptest::collection::vec(arb_position(), 0..=max_count).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, style, name, amount))| {
                Position::new(i.to_string(), category, style, name, amount)
            })
            .collect()
    })
}

fn leaf_sum(node: &HierarchyNode) -> Decimal {
    if node.is_leaf() {
        node.value.unwrap_or(Decimal::ZERO)
    } else {
        node.children.iter().map(leaf_sum).sum()
    }
}

fn layout_of(positions: &[Position]) -> SunburstLayout {
    compute_layout(&build_hierarchy(positions), &LayoutConfig::default())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Root value = sum of categories = sum of all amounts.
    #[test]
    fn prop_totals_agree(positions in arb_positions(40)) {
        let root = build_hierarchy(&positions);
        let amounts: Decimal = positions.iter().map(|p| p.amount).sum();
        let categories: Decimal = root.children.iter().map(HierarchyNode::aggregated_value).sum();

        prop_assert_eq!(root.aggregated_value(), amounts);
        prop_assert_eq!(categories, amounts);
        prop_assert_eq!(leaf_sum(&root), amounts);

        let layout = compute_layout(&root, &LayoutConfig::default());
        prop_assert_eq!(layout.total_value, amounts);
    }

    /// Every internal node's value is the sum of its children's values.
    #[test]
    fn prop_internal_values_are_child_sums(positions in arb_positions(40)) {
        let layout = layout_of(&positions);
        for node in &layout.nodes {
            let children: Vec<_> = layout.children(node.id).collect();
            if !children.is_empty() {
                let sum: Decimal = children.iter().map(|c| c.value).sum();
                prop_assert_eq!(sum, node.value);
            }
        }
    }

    /// Sibling spans exactly tile their parent's span.
    #[test]
    fn prop_sibling_spans_tile_parent(positions in arb_positions(40)) {
        let layout = layout_of(&positions);

        let top: f64 = layout.top_level().map(|n| n.angular_width()).sum();
        let expected = if layout.total_value > Decimal::ZERO { TAU } else { 0.0 };
        prop_assert!((top - expected).abs() < EPS);

        for node in &layout.nodes {
            let children: Vec<_> = layout.children(node.id).collect();
            if children.is_empty() {
                continue;
            }
            let sum: f64 = children.iter().map(|c| c.angular_width()).sum();
            prop_assert!((sum - node.angular_width()).abs() < EPS);
            prop_assert_eq!(children[0].angle_start, node.angle_start);
            prop_assert_eq!(children[children.len() - 1].angle_end, node.angle_end);
        }
    }

    /// Padded arcs stay inside the unpadded extent and never invert.
    #[test]
    fn prop_padded_arcs_are_well_formed(positions in arb_positions(40)) {
        let layout = layout_of(&positions);
        for node in &layout.nodes {
            prop_assert!(node.arc.start_angle <= node.arc.end_angle);
            prop_assert!(node.arc.start_angle >= node.angle_start - EPS);
            prop_assert!(node.arc.end_angle <= node.angle_end + EPS);
            prop_assert!(node.arc.inner_radius <= node.arc.outer_radius);
            if node.label.is_some() {
                prop_assert!(node.angular_width() > 0.15);
            }
        }
    }

    /// Percentages are value / total * 100.
    #[test]
    fn prop_percentage_matches_share(positions in arb_positions(20)) {
        let layout = layout_of(&positions);
        let mut interaction = SunburstInteraction::default();
        for node in &layout.nodes {
            interaction.handle(
                PointerEvent::Enter { node: node.id, pointer: PointerPosition::default() },
                &layout,
            );
            let focus = interaction.focus().unwrap();
            if layout.total_value > Decimal::ZERO {
                let expected = node.value / layout.total_value * Decimal::ONE_HUNDRED;
                prop_assert_eq!(focus.percentage, expected);
            } else {
                prop_assert_eq!(focus.percentage, Decimal::ZERO);
            }
            prop_assert_eq!(focus.ancestor_chain.len(), node.depth - 1);
        }
    }

    /// Same input, same tree and same layout.
    #[test]
    fn prop_rebuild_is_deterministic(positions in arb_positions(30)) {
        prop_assert_eq!(build_hierarchy(&positions), build_hierarchy(&positions));
        prop_assert_eq!(layout_of(&positions), layout_of(&positions));
    }
}

//! Tests for the hierarchy builder.

#[cfg(test)]
mod tests {
    use crate::hierarchy::{build_hierarchy, HierarchyNode};
    use crate::positions::{sample_portfolio, Position};
    use crate::sunburst::Rgba;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pos(id: &str, category: &str, style: &str, amount: Decimal) -> Position {
        Position::new(id, category, style, format!("fund-{}", id), amount)
    }

    fn names(nodes: &[HierarchyNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_bare_root() {
        let root = build_hierarchy(&[]);
        assert_eq!(root.name, "总资产");
        assert!(root.children.is_empty());
        assert_eq!(root.aggregated_value(), Decimal::ZERO);
        assert_eq!(root.height(), 0);
    }

    #[test]
    fn test_groups_preserve_first_seen_order() {
        let positions = vec![
            pos("1", "B", "Z", dec!(1)),
            pos("2", "A", "Y", dec!(1)),
            pos("3", "B", "W", dec!(1)),
            pos("4", "A", "X", dec!(1)),
            pos("5", "B", "Z", dec!(1)),
        ];
        let root = build_hierarchy(&positions);

        assert_eq!(names(&root.children), vec!["B", "A"]);
        assert_eq!(names(&root.children[0].children), vec!["Z", "W"]);
        assert_eq!(names(&root.children[1].children), vec!["Y", "X"]);

        let z_leaves: Vec<_> = root.children[0].children[0]
            .children
            .iter()
            .map(|l| l.position_id.as_deref().unwrap())
            .collect();
        assert_eq!(z_leaves, vec!["1", "5"]);
    }

    #[test]
    fn test_only_leaves_carry_values() {
        let root = build_hierarchy(&sample_portfolio());
        assert!(root.value.is_none());
        for category in &root.children {
            assert!(category.value.is_none());
            for style in &category.children {
                assert!(style.value.is_none());
                for leaf in &style.children {
                    assert!(leaf.value.is_some());
                    assert!(leaf.is_leaf());
                }
            }
        }
        assert_eq!(root.height(), 3);
    }

    #[test]
    fn test_aggregated_values() {
        let positions = vec![
            pos("1", "A", "X", dec!(100)),
            pos("2", "A", "Y", dec!(300)),
            pos("3", "B", "Z", dec!(600)),
        ];
        let root = build_hierarchy(&positions);
        assert_eq!(root.aggregated_value(), dec!(1000));
        assert_eq!(root.children[0].aggregated_value(), dec!(400));
        assert_eq!(root.children[1].aggregated_value(), dec!(600));
        assert_eq!(root.children[0].children[1].aggregated_value(), dec!(300));
    }

    #[test]
    fn test_category_colors_resolved_once_with_fallback() {
        let positions = vec![
            pos("1", "债券/固收", "利率债", dec!(10)),
            pos("2", "另类投资", "REITs", dec!(10)),
        ];
        let root = build_hierarchy(&positions);
        assert_eq!(root.children[0].color, Some(Rgba::from_hex("#10b981").unwrap()));
        assert_eq!(root.children[1].color, Some(Rgba::from_hex("#8b5cf6").unwrap()));
        // styles and leaves inherit at render time, not here
        assert!(root.children[0].children[0].color.is_none());
        assert!(root.color.is_none());
    }

    #[test]
    fn test_zero_amount_still_produces_leaf() {
        let positions = vec![pos("1", "A", "X", dec!(0)), pos("2", "A", "X", dec!(5))];
        let root = build_hierarchy(&positions);
        let leaves = &root.children[0].children[0].children;
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].value, Some(dec!(0)));
        assert_eq!(root.aggregated_value(), dec!(5));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let positions = sample_portfolio();
        assert_eq!(build_hierarchy(&positions), build_hierarchy(&positions));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let root = build_hierarchy(&[pos("1", "A", "X", dec!(7))]);
        let json = serde_json::to_value(&root).unwrap();
        assert!(json.get("value").is_none());
        assert!(json.get("color").is_none());
        let leaf = &json["children"][0]["children"][0]["children"][0];
        assert!(leaf.get("children").is_none());
        assert_eq!(leaf["positionId"], "1");
    }
}

//! Groups positions into the three-level portfolio tree.

use std::collections::HashMap;

use log::debug;

use crate::constants::ROOT_NODE_NAME;
use crate::positions::{category_color, Position};

use super::HierarchyNode;

/// Groups items by key, keeping groups in first-seen order and items in
/// input order within each group.
fn group_in_order<'a, F>(items: &[&'a Position], key: F) -> Vec<(&'a str, Vec<&'a Position>)>
where
    F: Fn(&'a Position) -> &'a str,
{
    let mut index_by_key: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a Position>)> = Vec::new();

    for &item in items {
        let k = key(item);
        match index_by_key.get(k) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index_by_key.insert(k, groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

/// Builds the portfolio tree: synthetic root → category → style → instrument.
///
/// The tree is rebuilt from scratch on every call; nothing is shared with a
/// previous result. Empty input yields a root without children.
pub fn build_hierarchy(positions: &[Position]) -> HierarchyNode {
    let all: Vec<&Position> = positions.iter().collect();

    let categories: Vec<HierarchyNode> = group_in_order(&all, |p| p.category.as_str())
        .into_iter()
        .map(|(category_name, category_items)| {
            let styles: Vec<HierarchyNode> =
                group_in_order(&category_items, |p| p.style.as_str())
                    .into_iter()
                    .map(|(style_name, style_items)| {
                        let leaves = style_items
                            .into_iter()
                            .map(|p| HierarchyNode::leaf(&p.name, p.amount, Some(p.id.clone())))
                            .collect();
                        HierarchyNode::group(style_name, leaves)
                    })
                    .collect();

            let mut category = HierarchyNode::group(category_name, styles);
            category.color = Some(category_color(category_name));
            category
        })
        .collect();

    debug!(
        "Built hierarchy with {} categories from {} positions",
        categories.len(),
        positions.len()
    );

    HierarchyNode::group(ROOT_NODE_NAME, categories)
}

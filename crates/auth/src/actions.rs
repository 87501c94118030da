//! Assembled menu forest → flat list of action codes.

use crate::MenuNode;

/// Collect the action codes reachable in `tree`.
///
/// Traversal contract: an explicit LIFO stack seeded with the top-level nodes
/// in order. Each popped node either emits all of its action codes (in
/// declaration order) and stops there, or, when it has no actions, pushes its
/// children in order. Later siblings are therefore drained, subtree first,
/// before earlier ones. Codes are not deduplicated.
pub fn extract_actions(tree: &[MenuNode]) -> Vec<String> {
    let mut codes = Vec::new();
    let mut stack: Vec<&MenuNode> = tree.iter().collect();

    while let Some(node) = stack.pop() {
        if !node.actions.is_empty() {
            // Screens carry actions; their children are never consulted.
            codes.extend(node.actions.iter().map(|action| action.code.clone()));
        } else {
            stack.extend(node.children.iter());
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_tree;
    use menugate_core::MenuId;

    fn node(id: &str, parent: Option<&str>) -> MenuNode {
        MenuNode::new(id, parent.map(MenuId::new))
    }

    #[test]
    fn pins_pop_order_for_nested_tree() {
        let records = vec![
            node("1", None),
            node("2", Some("1")),
            node("3", Some("1")).with_actions(["EDIT"]),
            node("4", Some("2")).with_actions(["VIEW"]),
        ];
        let tree = build_tree(&records, None).unwrap();

        assert_eq!(extract_actions(&tree), vec!["EDIT", "VIEW"]);
    }

    #[test]
    fn later_top_level_nodes_come_first() {
        let records = vec![
            node("a", None).with_actions(["A1", "A2"]),
            node("b", None).with_actions(["B1"]),
        ];
        let tree = build_tree(&records, None).unwrap();

        assert_eq!(extract_actions(&tree), vec!["B1", "A1", "A2"]);
    }

    #[test]
    fn actions_stop_descent_into_children() {
        let mut screen = node("s", None).with_actions(["OPEN"]);
        screen.children = vec![
            node("c1", Some("s")).with_actions(["HIDDEN"]),
            node("c2", Some("s")).with_actions(["ALSO_HIDDEN"]),
        ];

        assert_eq!(extract_actions(&[screen]), vec!["OPEN"]);
    }

    #[test]
    fn nodes_without_actions_or_children_contribute_nothing() {
        let tree = vec![node("x", None), node("y", None)];
        assert!(extract_actions(&tree).is_empty());
        assert!(extract_actions(&[]).is_empty());
    }

    #[test]
    fn duplicate_codes_are_kept() {
        let records = vec![
            node("1", None).with_actions(["SAVE"]),
            node("2", None).with_actions(["SAVE"]),
        ];
        let tree = build_tree(&records, None).unwrap();

        assert_eq!(extract_actions(&tree), vec!["SAVE", "SAVE"]);
    }
}

use methodmetrics::complexity::{calculate_complexity, score_method, score_methods};
use methodmetrics::core::{MethodNode, StatementKind, StatementNode};
use proptest::prelude::*;

fn stmt(kind: StatementKind, children: Vec<StatementNode>) -> StatementNode {
    StatementNode::new(kind).with_children(children)
}

#[test]
fn test_loop_with_two_nested_conditionals_scores_three() {
    let body = vec![stmt(
        StatementKind::LoopWhile,
        vec![
            stmt(StatementKind::Conditional, vec![]),
            stmt(StatementKind::Conditional, vec![]),
        ],
    )];

    assert_eq!(calculate_complexity(&body), 3);
}

#[test]
fn test_loop_with_three_nested_conditionals_scores_four() {
    let body = vec![stmt(
        StatementKind::LoopFor,
        vec![
            stmt(StatementKind::Conditional, vec![]),
            stmt(StatementKind::Other, vec![]),
            stmt(StatementKind::Conditional, vec![]),
            stmt(StatementKind::Conditional, vec![]),
        ],
    )];

    assert_eq!(calculate_complexity(&body), 4);
}

#[test]
fn test_depth_is_not_weighted() {
    // three nested for loops count the same as three sibling loops
    let nested = vec![stmt(
        StatementKind::LoopFor,
        vec![stmt(
            StatementKind::LoopFor,
            vec![stmt(StatementKind::LoopFor, vec![])],
        )],
    )];
    let flat = vec![
        stmt(StatementKind::LoopFor, vec![]),
        stmt(StatementKind::LoopFor, vec![]),
        stmt(StatementKind::LoopFor, vec![]),
    ];

    assert_eq!(calculate_complexity(&nested), 3);
    assert_eq!(calculate_complexity(&nested), calculate_complexity(&flat));
}

#[test]
fn test_every_tracked_kind_counts_once() {
    let body: Vec<_> = StatementKind::ALL
        .iter()
        .map(|kind| stmt(*kind, vec![]))
        .collect();
    assert_eq!(calculate_complexity(&body), 6);
}

#[test]
fn test_empty_method_scores_zero() {
    let score = score_method(&MethodNode::new("isReady", vec![]));
    assert_eq!(score.name, "isReady");
    assert_eq!(score.score, 0);
}

#[test]
fn test_score_methods_keeps_discovery_order() {
    let methods = vec![
        MethodNode::new("b", vec![stmt(StatementKind::Switch, vec![])]),
        MethodNode::new("a", vec![]),
    ];
    let names: Vec<_> = score_methods(&methods).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

fn statement_kind() -> impl Strategy<Value = StatementKind> {
    prop::sample::select(StatementKind::ALL.to_vec())
}

fn statement_tree() -> impl Strategy<Value = StatementNode> {
    let leaf = statement_kind().prop_map(StatementNode::new);
    leaf.prop_recursive(4, 48, 6, |inner| {
        (statement_kind(), prop::collection::vec(inner, 0..6))
            .prop_map(|(kind, children)| StatementNode::new(kind).with_children(children))
    })
}

fn flatten(nodes: &[StatementNode], out: &mut Vec<StatementKind>) {
    for node in nodes {
        out.push(node.kind);
        flatten(&node.children, out);
    }
}

fn reversed(nodes: &[StatementNode]) -> Vec<StatementNode> {
    nodes
        .iter()
        .rev()
        .map(|node| StatementNode::new(node.kind).with_children(reversed(&node.children)))
        .collect()
}

proptest! {
    /// Property: the score equals the number of tracked nodes in the tree
    #[test]
    fn prop_score_counts_tracked_nodes(body in prop::collection::vec(statement_tree(), 0..5)) {
        let mut kinds = Vec::new();
        flatten(&body, &mut kinds);
        let expected = kinds.iter().filter(|k| k.counts_toward_complexity()).count() as u32;

        prop_assert_eq!(calculate_complexity(&body), expected);
    }

    /// Property: sibling order does not change the score
    #[test]
    fn prop_score_is_order_invariant(body in prop::collection::vec(statement_tree(), 0..5)) {
        prop_assert_eq!(calculate_complexity(&body), calculate_complexity(&reversed(&body)));
    }
}

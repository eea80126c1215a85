use crate::core::{MethodNode, MethodScore, StatementKind, StatementNode};

/// Counts the statements anywhere under `statements` whose kind satisfies
/// `predicate`. Nested matches are counted on their own, without any
/// weighting by depth.
pub fn count_statements<P>(statements: &[StatementNode], predicate: &P) -> u32
where
    P: Fn(StatementKind) -> bool,
{
    statements
        .iter()
        .map(|stmt| u32::from(predicate(stmt.kind)) + count_statements(&stmt.children, predicate))
        .sum()
}

/// Number of branching and looping statements in a method body.
pub fn calculate_complexity(body: &[StatementNode]) -> u32 {
    count_statements(body, &StatementKind::counts_toward_complexity)
}

pub fn score_method(method: &MethodNode) -> MethodScore {
    MethodScore::new(method.name.clone(), calculate_complexity(&method.body))
}

/// Scores every method, keeping discovery order.
pub fn score_methods(methods: &[MethodNode]) -> Vec<MethodScore> {
    methods.iter().map(score_method).collect()
}

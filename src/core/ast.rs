//! Language-neutral view of the method declarations produced by an analyzer.

use serde::{Deserialize, Serialize};

/// Kind tag of a statement node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Conditional,
    LoopFor,
    LoopWhile,
    LoopDoWhile,
    LoopForEach,
    Switch,
    Other,
}

impl StatementKind {
    pub const ALL: [StatementKind; 7] = [
        StatementKind::Conditional,
        StatementKind::LoopFor,
        StatementKind::LoopWhile,
        StatementKind::LoopDoWhile,
        StatementKind::LoopForEach,
        StatementKind::Switch,
        StatementKind::Other,
    ];

    /// Whether a statement of this kind adds one to a method's complexity score.
    pub fn counts_toward_complexity(self) -> bool {
        match self {
            StatementKind::Conditional
            | StatementKind::LoopFor
            | StatementKind::LoopWhile
            | StatementKind::LoopDoWhile
            | StatementKind::LoopForEach
            | StatementKind::Switch => true,
            StatementKind::Other => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementNode {
    pub kind: StatementKind,
    pub line: usize,
    pub children: Vec<StatementNode>,
}

impl StatementNode {
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            line: 0,
            children: Vec::new(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn with_children(mut self, children: Vec<StatementNode>) -> Self {
        self.children = children;
        self
    }
}

/// A method declaration: its name and the statements of its body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNode {
    pub name: String,
    pub line: usize,
    pub body: Vec<StatementNode>,
}

impl MethodNode {
    pub fn new(name: impl Into<String>, body: Vec<StatementNode>) -> Self {
        Self {
            name: name.into(),
            line: 0,
            body,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

//! Java analyzer backed by tree-sitter-java.

use std::path::Path;

use tree_sitter::{Node, Parser};

use super::Analyzer;
use crate::core::{Error, Language, MethodNode, Result, StatementKind, StatementNode};

/// Statement kinds that never count toward complexity.
const OTHER_STATEMENTS: &[&str] = &[
    "block",
    "expression_statement",
    "labeled_statement",
    "assert_statement",
    "break_statement",
    "continue_statement",
    "return_statement",
    "yield_statement",
    "synchronized_statement",
    "local_variable_declaration",
    "throw_statement",
    "try_statement",
    "try_with_resources_statement",
];

/// Parents under which a `switch_expression` is a statement rather than a value.
const STATEMENT_CONTAINERS: &[&str] = &[
    "block",
    "switch_block_statement_group",
    "labeled_statement",
    "if_statement",
    "while_statement",
    "do_statement",
    "for_statement",
    "enhanced_for_statement",
];

pub struct JavaAnalyzer {
    language: tree_sitter::Language,
}

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    fn parse_tree(&self, content: &str, path: &Path) -> Result<tree_sitter::Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::Unsupported(format!("Failed to set Java language: {e}")))?;
        parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(path, 0, 0, "parser produced no syntax tree"))
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for JavaAnalyzer {
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<MethodNode>> {
        let tree = self.parse_tree(content, path)?;
        let root = tree.root_node();

        if let Some(error) = first_error(root) {
            let position = error.start_position();
            let message = if error.is_missing() {
                format!("missing {}", error.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(Error::parse(
                path,
                position.row + 1,
                position.column + 1,
                message,
            ));
        }

        let mut methods = Vec::new();
        collect_methods(root, content, &mut methods);
        Ok(methods)
    }

    fn language(&self) -> Language {
        Language::Java
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

/// Pre-order, so methods come out in document order and an enclosing method
/// precedes the methods of classes declared inside it.
fn collect_methods(node: Node, source: &str, methods: &mut Vec<MethodNode>) {
    if node.kind() == "method_declaration" {
        if let Some(method) = extract_method(node, source) {
            methods.push(method);
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_methods(child, source, methods);
    }
}

fn extract_method(node: Node, source: &str) -> Option<MethodNode> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source.as_bytes())
        .ok()?;
    let body = node
        .child_by_field_name("body")
        .map(collect_statements)
        .unwrap_or_default();

    Some(MethodNode::new(name, body).at_line(node.start_position().row + 1))
}

/// Statements directly or transitively below `node`. Nodes that are not
/// statements are looked through, so a statement inside a lambda or an
/// anonymous class attaches to the closest enclosing statement.
fn collect_statements(node: Node) -> Vec<StatementNode> {
    let mut statements = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match classify(child) {
            Some(kind) => statements.push(
                StatementNode::new(kind)
                    .at_line(child.start_position().row + 1)
                    .with_children(collect_statements(child)),
            ),
            None => statements.extend(collect_statements(child)),
        }
    }
    statements
}

fn classify(node: Node) -> Option<StatementKind> {
    match node.kind() {
        "if_statement" => Some(StatementKind::Conditional),
        "for_statement" => Some(StatementKind::LoopFor),
        "enhanced_for_statement" => Some(StatementKind::LoopForEach),
        "while_statement" => Some(StatementKind::LoopWhile),
        "do_statement" => Some(StatementKind::LoopDoWhile),
        "switch_expression" | "switch_statement" if in_statement_position(node) => {
            Some(StatementKind::Switch)
        }
        kind if OTHER_STATEMENTS.contains(&kind) => Some(StatementKind::Other),
        _ => None,
    }
}

fn in_statement_position(node: Node) -> bool {
    node.parent()
        .map(|parent| STATEMENT_CONTAINERS.contains(&parent.kind()))
        .unwrap_or(false)
}

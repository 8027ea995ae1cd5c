use std::{fmt::Display, slice::Iter};

use serde::{Deserialize, Serialize};

/// Node Kinds
///
/// The tag carried by every syntax tree node. Serialized by variant name,
/// which is also the `type` string of the interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    Expression,
    Operator,
    Identifier,
    Integer,
    Assignment,
    ControlStructure,
    Return,
}

impl NodeKind {
    /// Kinds that lower to a value rather than to instructions.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            NodeKind::Expression | NodeKind::Operator | NodeKind::Identifier | NodeKind::Integer
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Syntax Tree Node
///
/// A tagged node that exclusively owns its children. The field order matches
/// the interchange record `{type, value, children}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, value: Option<String>) -> Self {
        SyntaxNode {
            kind,
            value,
            children: vec![],
        }
    }

    /// Root node of a parse.
    pub fn program() -> Self {
        SyntaxNode::new(NodeKind::Program, None)
    }

    /// Leaf carrying literal text, e.g. an identifier or integer.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        SyntaxNode::new(kind, Some(value.into()))
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    /// Removes and returns the last child.
    pub fn pop(&mut self) -> Option<SyntaxNode> {
        self.children.pop()
    }

    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    pub fn iter(&self) -> Iter<'_, SyntaxNode> {
        self.children.iter()
    }

    pub fn value_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Display for SyntaxNode {
    /// Indented outline, one node per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &SyntaxNode,
            depth: usize,
            f: &mut std::fmt::Formatter<'_>,
        ) -> std::fmt::Result {
            write!(f, "{}{}", "  ".repeat(depth), node.kind)?;
            if let Some(value) = &node.value {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
            for child in &node.children {
                write_node(child, depth + 1, f)?;
            }
            Ok(())
        }

        write_node(self, 0, f)
    }
}

//! Unit tests for TAC generation.

use std::rc::Rc;

use crate::{
    ast::ast::{NodeKind, SyntaxNode},
    errors::errors::LoweringWarning,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{
    compiler::{generate, Lowered, TacCompiler},
    instruction::TacInstruction,
};

fn lower(source: &str) -> Lowered {
    let tokens = tokenize(source, Some("test.tac".to_string())).unwrap();
    let tree = parse(tokens, Rc::new("test.tac".to_string())).unwrap();
    generate(&tree)
}

#[test]
fn test_instruction_display() {
    let cases = [
        (
            TacInstruction::Copy {
                dest: "y".to_string(),
                src: "t1".to_string(),
            },
            "y = t1",
        ),
        (
            TacInstruction::Binary {
                dest: "t1".to_string(),
                left: "x".to_string(),
                op: "+".to_string(),
                right: "1".to_string(),
            },
            "t1 = x + 1",
        ),
        (
            TacInstruction::Return {
                value: "y".to_string(),
            },
            "return y",
        ),
        (
            TacInstruction::IfFalse {
                condition: "t2".to_string(),
                label: "L1".to_string(),
            },
            "ifFalse t2 goto L1",
        ),
        (
            TacInstruction::Goto {
                label: "L2".to_string(),
            },
            "goto L2",
        ),
        (
            TacInstruction::Label {
                name: "L1".to_string(),
            },
            "L1:",
        ),
    ];

    for (instruction, line) in cases {
        assert_eq!(instruction.to_string(), line);
    }
}

#[test]
fn test_counters_are_monotonic() {
    let mut compiler = TacCompiler::new();

    assert_eq!(compiler.new_temp(), "t1");
    assert_eq!(compiler.new_temp(), "t2");
    assert_eq!(compiler.new_label(), "L1");
    assert_eq!(compiler.new_temp(), "t3");
    assert_eq!(compiler.new_label(), "L2");
}

#[test]
fn test_lower_simple_assignment() {
    let lowered = lower("x = 10 + 5;");

    assert_eq!(lowered.lines(), vec!["t1 = 10 + 5", "x = t1"]);
    assert!(lowered.warnings.is_empty());
}

#[test]
fn test_lower_literal_assignment_needs_no_temporary() {
    let lowered = lower("x = y;");

    assert_eq!(lowered.lines(), vec!["x = y"]);
}

#[test]
fn test_lower_left_folded_chain() {
    let lowered = lower("return (x + y) * z - 1;");

    assert_eq!(
        lowered.lines(),
        vec!["t1 = x + y", "t2 = t1 * z", "t3 = t2 - 1", "return t3"]
    );
}

#[test]
fn test_lower_if_statement() {
    let lowered = lower("if (n) { n = n - 1; return r; }");

    assert_eq!(
        lowered.lines(),
        vec![
            "ifFalse n goto L1",
            "t1 = n - 1",
            "n = t1",
            "return r",
            "goto L2",
            "L1:",
            "L2:",
        ]
    );
}

#[test]
fn test_lower_if_with_computed_condition() {
    let lowered = lower("if (x + 10) { return y; }");

    assert_eq!(
        lowered.lines(),
        vec!["t1 = x + 10", "ifFalse t1 goto L1", "return y", "goto L2", "L1:", "L2:"]
    );
}

#[test]
fn test_lower_nested_if_uses_fresh_labels() {
    let lowered = lower("if (a) { if (b) { x = 1; } } if (c) { }");

    assert_eq!(
        lowered.lines(),
        vec![
            "ifFalse a goto L1",
            "ifFalse b goto L3",
            "x = 1",
            "goto L4",
            "L3:",
            "L4:",
            "goto L2",
            "L1:",
            "L2:",
            "ifFalse c goto L5",
            "goto L6",
            "L5:",
            "L6:",
        ]
    );
}

#[test]
fn test_while_is_skipped_with_warning() {
    let lowered = lower("x = 1; while (a - 5) { x = x * 2; } return x;");

    assert_eq!(lowered.lines(), vec!["x = 1", "return x"]);
    assert_eq!(
        lowered.warnings,
        vec![LoweringWarning::UnsupportedNode {
            kind: "ControlStructure".to_string(),
            value: Some("while".to_string()),
        }]
    );
}

#[test]
fn test_while_inside_if_is_skipped() {
    let lowered = lower("if (a) { while (b) { c = 1; } d = 2; }");

    assert_eq!(
        lowered.lines(),
        vec!["ifFalse a goto L1", "d = 2", "goto L2", "L1:", "L2:"]
    );
    assert_eq!(lowered.warnings.len(), 1);
}

#[test]
fn test_each_generation_starts_fresh() {
    let first = lower("x = a + b;");
    let second = lower("y = c + d;");

    assert_eq!(first.lines(), vec!["t1 = a + b", "x = t1"]);
    assert_eq!(second.lines(), vec!["t1 = c + d", "y = t1"]);
}

#[test]
fn test_malformed_nodes_are_warnings() {
    let mut tree = SyntaxNode::program();
    tree.push(SyntaxNode::new(NodeKind::Return, None));
    tree.push(
        SyntaxNode::new(NodeKind::Assignment, None).with_children(vec![
            SyntaxNode::leaf(NodeKind::Identifier, "x"),
            SyntaxNode::new(NodeKind::Expression, None).with_children(vec![
                SyntaxNode::leaf(NodeKind::Operator, "+")
                    .with_children(vec![SyntaxNode::leaf(NodeKind::Integer, "1")]),
            ]),
        ]),
    );
    tree.push(
        SyntaxNode::new(NodeKind::Return, None).with_children(vec![SyntaxNode::leaf(
            NodeKind::Integer,
            "0",
        )]),
    );

    let lowered = generate(&tree);

    assert_eq!(lowered.lines(), vec!["return 0"]);
    assert_eq!(lowered.warnings.len(), 2);
    assert!(lowered
        .warnings
        .iter()
        .all(|warning| matches!(warning, LoweringWarning::MalformedNode { .. })));
}

#[test]
fn test_statement_in_value_position_is_unsupported() {
    let tree = SyntaxNode::program().with_children(vec![SyntaxNode::new(NodeKind::Return, None)
        .with_children(vec![SyntaxNode::new(NodeKind::Program, None)])]);

    let lowered = generate(&tree);

    assert!(lowered.instructions.is_empty());
    assert_eq!(
        lowered.warnings,
        vec![LoweringWarning::UnsupportedNode {
            kind: "Program".to_string(),
            value: None,
        }]
    );
}

#[test]
fn test_bare_expression_statement_is_evaluated() {
    let tree = SyntaxNode::program().with_children(vec![SyntaxNode::new(
        NodeKind::Expression,
        None,
    )
    .with_children(vec![SyntaxNode::leaf(NodeKind::Operator, "*").with_children(vec![
        SyntaxNode::leaf(NodeKind::Identifier, "a"),
        SyntaxNode::leaf(NodeKind::Integer, "2"),
    ])])]);

    let lowered = generate(&tree);

    assert_eq!(lowered.lines(), vec!["t1 = a * 2"]);
    assert!(lowered.warnings.is_empty());
}

use crate::ast::ast::{NodeKind, SyntaxNode};

use super::{compiler::TacCompiler, expr::gen_expression, instruction::TacInstruction};

pub fn gen_statement(compiler: &mut TacCompiler, statement: &SyntaxNode) {
    match statement.kind {
        NodeKind::Program => {
            for child in statement.iter() {
                gen_statement(compiler, child);
            }
        }
        NodeKind::Assignment => {
            let Some(target) = statement.child(0).and_then(SyntaxNode::value_str) else {
                compiler.malformed(statement, "missing assignment target");
                return;
            };
            let Some(expression) = statement.child(1) else {
                compiler.malformed(statement, "missing assigned value");
                return;
            };

            if let Some(value) = gen_expression(compiler, expression) {
                compiler.emit(TacInstruction::Copy {
                    dest: target.to_string(),
                    src: value,
                });
            }
        }
        NodeKind::Return => {
            let Some(expression) = statement.child(0) else {
                compiler.malformed(statement, "missing return value");
                return;
            };

            if let Some(value) = gen_expression(compiler, expression) {
                compiler.emit(TacInstruction::Return { value });
            }
        }
        NodeKind::ControlStructure if statement.value_str() == Some("if") => {
            gen_if_statement(compiler, statement);
        }
        kind if kind.is_value() => {
            // Evaluated for its instructions, result unused.
            gen_expression(compiler, statement);
        }
        _ => compiler.unsupported(statement),
    }
}

/// Lowers `if (cond) { body }`.
///
/// ```text
/// ifFalse cond goto L_else
/// <body>
/// goto L_end
/// L_else:
/// L_end:
/// ```
fn gen_if_statement(compiler: &mut TacCompiler, statement: &SyntaxNode) {
    let Some(condition) = statement.child(0) else {
        compiler.malformed(statement, "missing condition");
        return;
    };
    let Some(condition) = gen_expression(compiler, condition) else {
        return;
    };

    let else_label = compiler.new_label();
    let end_label = compiler.new_label();

    compiler.emit(TacInstruction::IfFalse {
        condition,
        label: else_label.clone(),
    });

    for child in statement.iter().skip(1) {
        gen_statement(compiler, child);
    }

    compiler.emit(TacInstruction::Goto {
        label: end_label.clone(),
    });
    // No else-branch in the language: nothing goes between the two labels.
    compiler.emit(TacInstruction::Label { name: else_label });
    compiler.emit(TacInstruction::Label { name: end_label });
}

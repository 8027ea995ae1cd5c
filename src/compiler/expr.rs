use crate::ast::ast::{NodeKind, SyntaxNode};

use super::{compiler::TacCompiler, instruction::TacInstruction};

/// Lowers a value-producing node and returns the operand naming its value.
///
/// Leaves yield their literal text, operators yield a fresh temporary.
/// Returns `None` (after recording a warning) when the node cannot produce a
/// value.
pub fn gen_expression(compiler: &mut TacCompiler, expression: &SyntaxNode) -> Option<String> {
    match expression.kind {
        NodeKind::Identifier | NodeKind::Integer => match &expression.value {
            Some(value) => Some(value.clone()),
            None => {
                compiler.malformed(expression, "missing literal text");
                None
            }
        },
        NodeKind::Expression => match expression.child(0) {
            Some(inner) => gen_expression(compiler, inner),
            None => {
                compiler.malformed(expression, "empty expression");
                None
            }
        },
        NodeKind::Operator => {
            let (Some(op), Some(left), Some(right)) = (
                expression.value_str(),
                expression.child(0),
                expression.child(1),
            ) else {
                compiler.malformed(expression, "expected an operator symbol and two operands");
                return None;
            };

            let left = gen_expression(compiler, left)?;
            let right = gen_expression(compiler, right)?;
            let dest = compiler.new_temp();

            compiler.emit(TacInstruction::Binary {
                dest: dest.clone(),
                left,
                op: op.to_string(),
                right,
            });

            Some(dest)
        }
        _ => {
            compiler.unsupported(expression);
            None
        }
    }
}

use crate::{ast::ast::{NodeKind, SyntaxNode}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Expression := Term (Operator Term)*
///
/// Operators fold to the left with no precedence: `a - b * c` is
/// `(a - b) * c`. The returned `Expression` node always has exactly one child.
pub fn parse_expr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let mut node = SyntaxNode::new(NodeKind::Expression, None);
    node.push(parse_term(parser)?);

    while parser.current_token_kind() == Some(TokenKind::Operator) {
        let operator_token = parser.expect(TokenKind::Operator)?;
        let right = parse_term(parser)?;

        let mut operator = SyntaxNode::leaf(NodeKind::Operator, operator_token.value);
        if let Some(left) = node.pop() {
            operator.push(left);
        }
        operator.push(right);
        node.push(operator);
    }

    Ok(node)
}

/// Term := Identifier | Integer | "(" Expression ")"
pub fn parse_term(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.end_of_input("identifier, integer or `(`"));
    };

    match token.kind {
        TokenKind::Identifier => {
            let token = parser.expect(TokenKind::Identifier)?;
            Ok(SyntaxNode::leaf(NodeKind::Identifier, token.value))
        }
        TokenKind::Integer => {
            let token = parser.expect(TokenKind::Integer)?;
            Ok(SyntaxNode::leaf(NodeKind::Integer, token.value))
        }
        TokenKind::Symbol if token.is_symbol("(") => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected identifier, integer or `(`"),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    parser.expect_symbol("(")?;
    let expr = parse_expr(parser)?;
    parser.expect_symbol(")")?;

    Ok(expr)
}

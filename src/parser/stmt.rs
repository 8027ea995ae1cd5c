use crate::{ast::ast::{NodeKind, SyntaxNode}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

/// Parses one statement.
///
/// Returns `Ok(None)` without consuming anything when the current token
/// cannot start a statement. Once a statement has started, any mismatch is
/// an error.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<SyntaxNode>, Error> {
    let Some(token) = parser.current_token() else {
        return Ok(None);
    };

    match token.kind {
        TokenKind::Keyword => {
            match parser.get_stmt_lookup().get(token.value.as_str()).copied() {
                Some(handler) => handler(parser).map(Some),
                None => Ok(None),
            }
        }
        TokenKind::Identifier => parse_assignment_stmt(parser).map(Some),
        _ => Ok(None),
    }
}

/// Parses statements until one can no longer start, appending each to `node`.
fn parse_block_body(parser: &mut Parser, node: &mut SyntaxNode) -> Result<(), Error> {
    while let Some(stmt) = parse_stmt(parser)? {
        node.push(stmt);
    }

    Ok(())
}

pub fn parse_control_structure_stmt(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let keyword = parser.expect(TokenKind::Keyword)?;
    let mut node = SyntaxNode::leaf(NodeKind::ControlStructure, keyword.value);

    parser.expect_symbol("(")?;
    let condition = parse_expr(parser)?;
    parser.expect_symbol(")")?;
    node.push(condition);

    parser.expect_symbol("{")?;
    parse_block_body(parser, &mut node)?;
    parser.expect_symbol("}")?;

    Ok(node)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    parser.expect_value(TokenKind::Keyword, "return")?;

    let value = parse_expr(parser)?;
    parser.expect_symbol(";")?;

    Ok(SyntaxNode::new(NodeKind::Return, None).with_children(vec![value]))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<SyntaxNode, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;

    if let Some(token) = parser.current_token() {
        if !token.is(TokenKind::Operator, "=") {
            return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: token.value.clone(), message: format!("expected `=` after `{}`", identifier.value) }, token.span.start.clone()));
        }
    }
    parser.expect_value(TokenKind::Operator, "=")?;

    let value = parse_expr(parser)?;
    parser.expect_symbol(";")?;

    Ok(SyntaxNode::new(NodeKind::Assignment, None).with_children(vec![
        SyntaxNode::leaf(NodeKind::Identifier, identifier.value),
        value,
    ]))
}

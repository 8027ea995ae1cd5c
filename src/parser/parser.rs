//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. Statements are dispatched through a lookup table keyed by
//! keyword, expressions are parsed by plain recursive descent.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the current position in it, and the
/// `Program` root that top-level statements are attached to while parsing.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Root of the tree under construction, owned exclusively by the parser
    root: SyntaxNode,
    /// Lookup table for keyword-led statement handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            root: SyntaxNode::program(),
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Expects a token of the given kind spelling `value`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedTokenDetailed` error, or `UnexpectedEndOfInput` when the
    /// tokens have run out.
    pub fn expect_value(&mut self, kind: TokenKind, value: &str) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.is(kind, value) => Ok(self.advance_unchecked()),
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: format!("expected `{}`", value),
                },
                token.span.start.clone(),
            )),
            None => Err(self.end_of_input(&format!("`{}`", value))),
        }
    }

    /// Expects a symbol token (`;`, `(`, `)`, `{`, `}`).
    pub fn expect_symbol(&mut self, symbol: &str) -> Result<Token, Error> {
        self.expect_value(TokenKind::Symbol, symbol)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => Ok(self.advance_unchecked()),
            Some(token) => Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })),
            None => Err(self.end_of_input(&expected_kind.to_string())),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    fn advance_unchecked(&mut self) -> Token {
        self.pos += 1;
        self.tokens[self.pos - 1].clone()
    }

    /// Error for a rule that ran out of input.
    pub fn end_of_input(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
            self.get_position(),
        )
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a keyword.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword that introduces the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Returns the current position in the source file.
    ///
    /// Past the last token this is the end of the last token.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}

/// Parses a stream of tokens into a syntax tree.
///
/// This is the main entry point for parsing. Top-level statements are
/// attached to the `Program` root as each one is parsed. Parsing succeeds only
/// when every token has been consumed.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<SyntaxNode, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    while let Some(stmt) = parse_stmt(&mut parser)? {
        parser.root.push(stmt);
    }

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    debug!(
        statements = parser.root.children.len(),
        tokens = parser.consumed(),
        "parsed {}",
        parser.file
    );

    Ok(parser.root)
}

use std::collections::HashMap;

use crate::{ast::ast::SyntaxNode, errors::errors::Error};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<SyntaxNode, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt("if", parse_control_structure_stmt);
    parser.stmt("while", parse_control_structure_stmt);
    parser.stmt("return", parse_return_stmt);
}

// Lookup table inside parser struct, keyed by keyword text
pub type StmtLookup = HashMap<&'static str, StmtHandler>;

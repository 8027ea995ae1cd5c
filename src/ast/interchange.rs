//! JSON interchange for syntax trees.
//!
//! Every node is stored as `{"type": ..., "value": ..., "children": [...]}`,
//! recursively. Loading a document and saving it again reproduces it.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::ast::SyntaxNode;

fn interchange_error(error: serde_json::Error) -> Error {
    Error::new(
        ErrorImpl::Interchange {
            message: error.to_string(),
        },
        Position::null(),
    )
}

pub fn to_json(tree: &SyntaxNode) -> Result<String, Error> {
    serde_json::to_string(tree).map_err(interchange_error)
}

pub fn to_json_pretty(tree: &SyntaxNode) -> Result<String, Error> {
    serde_json::to_string_pretty(tree).map_err(interchange_error)
}

pub fn from_json(document: &str) -> Result<SyntaxNode, Error> {
    serde_json::from_str(document).map_err(interchange_error)
}

//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns tried in a
//!   fixed priority order (keyword, identifier, integer, operator, symbol)
//! - Token position tracking for error reporting
//! - Whitespace skipping
//! - A configurable policy for unrecognised characters

pub mod lexer;
pub mod tokens;

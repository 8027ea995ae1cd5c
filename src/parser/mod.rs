//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a syntax tree rooted at a `Program` node. It handles:
//!
//! - Statement parsing (control structures, returns, assignments), dispatched
//!   by keyword through a lookup table
//! - Left-flat expression parsing: every operator folds to the left with no
//!   precedence levels
//! - Fail-fast error reporting: the first mismatch aborts the whole parse,
//!   and input left over after the last statement is an error

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

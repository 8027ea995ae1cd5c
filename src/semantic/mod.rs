//! Semantic analysis module.
//!
//! Walks a parsed syntax tree with a symbol table and reports:
//!
//! - Identifiers used inside a control structure that were never declared
//! - Assignments that redeclare a name already declared in the same scope
//!
//! Scopes are flat labels. Entering a control structure tags new entries
//! with its keyword and leaving it always returns to `global`. The pass
//! never stops early; every finding is collected.

pub mod analyzer;
pub mod symbol_table;

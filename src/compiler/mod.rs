//! Code generation module for the compiler.
//!
//! This module lowers the syntax tree into three-address code (TAC). It
//! handles:
//!
//! - Expression lowering, allocating one temporary per operator
//! - Statement lowering for assignments, returns and `if`
//! - Label allocation for control flow
//! - Warnings for constructs with no lowering (`while`, stray nodes)

pub mod compiler;
pub mod expr;
pub mod instruction;
pub mod stmt;

#[cfg(test)]
mod tests;

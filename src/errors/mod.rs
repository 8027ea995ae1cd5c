//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Structural errors with source position information (lexing, parsing,
//!   tree interchange), which stop their stage
//! - Advisory warnings from semantic analysis and TAC generation, which are
//!   collected and never stop their stage
//! - Error tips used when rendering errors for the user

pub mod errors;

#[cfg(test)]
mod tests;

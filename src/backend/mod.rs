//! Backends consuming three-address code.
//!
//! `riscv` is a two-pattern text substitution demo, not a code generator.

pub mod riscv;

//! Main TAC generation module.
//!
//! This module contains the `TacCompiler` context that the statement and
//! expression generators share. A fresh context is created for every call to
//! [`generate`], so temporary and label numbering always starts at 1.

use tracing::{debug, warn};

use crate::{ast::ast::SyntaxNode, errors::errors::LoweringWarning};

use super::{instruction::TacInstruction, stmt::gen_statement};

/// State of one lowering pass.
///
/// Holds the temporary and label counters, the instructions emitted so far,
/// and the warnings for nodes that could not be lowered.
#[derive(Debug, Default)]
pub struct TacCompiler {
    /// Last temporary handed out (`t<n>`)
    temp_count: usize,
    /// Last label handed out (`L<n>`)
    label_count: usize,
    /// Emitted instructions, in program order
    pub instructions: Vec<TacInstruction>,
    /// Nodes skipped during lowering
    pub warnings: Vec<LoweringWarning>,
}

impl TacCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh temporary name.
    pub fn new_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("t{}", self.temp_count)
    }

    /// Allocates a fresh label name.
    pub fn new_label(&mut self) -> String {
        self.label_count += 1;
        format!("L{}", self.label_count)
    }

    pub fn emit(&mut self, instruction: TacInstruction) {
        self.instructions.push(instruction);
    }

    pub fn warn(&mut self, warning: LoweringWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn unsupported(&mut self, node: &SyntaxNode) {
        self.warn(LoweringWarning::UnsupportedNode {
            kind: node.kind.to_string(),
            value: node.value.clone(),
        });
    }

    pub fn malformed(&mut self, node: &SyntaxNode, reason: &str) {
        self.warn(LoweringWarning::MalformedNode {
            kind: node.kind.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn finish(self) -> Lowered {
        Lowered {
            instructions: self.instructions,
            warnings: self.warnings,
        }
    }
}

/// Output of a lowering pass.
#[derive(Debug, Clone)]
pub struct Lowered {
    pub instructions: Vec<TacInstruction>,
    pub warnings: Vec<LoweringWarning>,
}

impl Lowered {
    /// Instructions rendered as text lines.
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

/// Lowers a complete syntax tree to three-address code.
///
/// Unsupported constructs are reported in [`Lowered::warnings`] and
/// contribute no instructions; lowering itself never fails.
pub fn generate(tree: &SyntaxNode) -> Lowered {
    let mut compiler = TacCompiler::new();
    gen_statement(&mut compiler, tree);

    let lowered = compiler.finish();
    debug!(
        instructions = lowered.instructions.len(),
        warnings = lowered.warnings.len(),
        "lowered to three-address code"
    );

    lowered
}

use tracing::{debug, warn};

use crate::{
    ast::ast::{NodeKind, SyntaxNode},
    errors::errors::SemanticWarning,
};

use super::symbol_table::{SymbolKind, SymbolTable};

/// Result of a semantic pass: the table that was built and every finding.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub diagnostics: Vec<SemanticWarning>,
}

impl Analysis {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics rendered for reporting, in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    diagnostics: Vec<SemanticWarning>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    fn report(&mut self, warning: SemanticWarning) {
        warn!("{}", warning);
        self.diagnostics.push(warning);
    }

    pub fn analyze_node(&mut self, node: &SyntaxNode) {
        match node.kind {
            NodeKind::Identifier => {
                let Some(name) = node.value_str() else {
                    return;
                };

                if !self.symbols.is_global() && !self.symbols.contains(name) {
                    self.report(SemanticWarning::Undeclared {
                        name: name.to_string(),
                        scope: self.symbols.current_scope().to_string(),
                    });
                }
            }
            NodeKind::Assignment => {
                // Declaring site only: the assigned value is not a use.
                let Some(target) = node.child(0).and_then(SyntaxNode::value_str) else {
                    return;
                };

                if let Err(warning) = self.symbols.declare(target, SymbolKind::Variable) {
                    self.report(warning);
                }
            }
            NodeKind::ControlStructure => {
                self.symbols
                    .enter_scope(node.value_str().unwrap_or("ControlStructure"));
                for child in node.iter() {
                    self.analyze_node(child);
                }
                self.symbols.exit_scope();
            }
            _ => {
                for child in node.iter() {
                    self.analyze_node(child);
                }
            }
        }
    }

    pub fn finish(self) -> Analysis {
        Analysis {
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        }
    }
}

/// Runs the semantic pass over a complete tree. Never fails; findings are
/// collected in the returned [`Analysis`].
pub fn analyze(tree: &SyntaxNode) -> Analysis {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze_node(tree);

    let analysis = analyzer.finish();
    debug!(
        symbols = analysis.symbols.len(),
        diagnostics = analysis.diagnostics.len(),
        "semantic analysis finished"
    );

    analysis
}

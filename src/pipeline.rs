//! End-to-end driver.
//!
//! Tokenizing and parsing are structural: either fails the whole run and no
//! tree is produced. The parser only ever sees a clean token stream, so the
//! lex policy matters for [`tokenize_source`] alone. Semantic analysis and TAC generation are advisory: they
//! always run on a parsed tree and report their findings alongside the
//! output.

use std::rc::Rc;

use tracing::info;

use crate::{
    ast::ast::SyntaxNode,
    compiler::compiler::{generate, Lowered},
    errors::errors::Error,
    lexer::{
        lexer::{tokenize_with_policy, LexPolicy, Tokenized},
        tokens::Token,
    },
    parser::parser::parse,
    semantic::analyzer::{analyze, Analysis},
};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub lex_policy: LexPolicy,
    /// Name used in positions and error messages
    pub file: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            lex_policy: LexPolicy::AbortOnFirst,
            file: String::from("shell"),
        }
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub tree: SyntaxNode,
    pub analysis: Analysis,
    pub lowered: Lowered,
}

impl Compilation {
    /// True when neither advisory stage reported anything.
    pub fn is_clean(&self) -> bool {
        !self.analysis.has_diagnostics()
            && self.lowered.warnings.is_empty()
    }

    pub fn tac_lines(&self) -> Vec<String> {
        self.lowered.lines()
    }
}

/// Runs the analysis stages over an already parsed tree.
pub fn compile_tree(tree: &SyntaxNode) -> (Analysis, Lowered) {
    (analyze(tree), generate(tree))
}

/// Tokenizes only, honouring the configured lex policy.
pub fn tokenize_source(source: &str, options: &PipelineOptions) -> Result<Tokenized, Error> {
    tokenize_with_policy(source, Some(options.file.clone()), options.lex_policy)
}

/// Runs every stage. The first unrecognised character fails the run under
/// either lex policy.
pub fn compile_source(source: &str, options: &PipelineOptions) -> Result<Compilation, Error> {
    let mut tokenized = tokenize_source(source, options)?;
    if !tokenized.unrecognised.is_empty() {
        return Err(tokenized.unrecognised.swap_remove(0));
    }

    let tree = parse(tokenized.tokens.clone(), Rc::new(options.file.clone()))?;
    let (analysis, lowered) = compile_tree(&tree);

    info!(
        file = %options.file,
        diagnostics = analysis.diagnostics.len(),
        lowering_warnings = lowered.warnings.len(),
        instructions = lowered.instructions.len(),
        "compiled"
    );

    Ok(Compilation {
        tokens: tokenized.tokens,
        tree,
        analysis,
        lowered,
    })
}

#[cfg(test)]
mod tests {
    use crate::lexer::lexer::LexPolicy;

    use super::{compile_source, tokenize_source, PipelineOptions};

    #[test]
    fn test_default_options_abort_on_unknown_characters() {
        let error = compile_source("x = 1; @", &PipelineOptions::default()).unwrap_err();
        assert!(error.is_lexical());
        assert_eq!(error.get_position().1.as_str(), "shell");
    }

    #[test]
    fn test_unrecognised_character_fails_under_both_policies() {
        for lex_policy in [LexPolicy::AbortOnFirst, LexPolicy::ContinueAndReport] {
            let options = PipelineOptions {
                lex_policy,
                file: String::from("demo.tac"),
            };

            let error = compile_source("x = 1; @", &options).unwrap_err();
            assert!(error.is_lexical(), "{:?}", lex_policy);
            assert_eq!(error.get_position().0, 7);
            assert!(compile_source("x = 1;", &options).is_ok());
        }
    }

    #[test]
    fn test_continue_policy_reports_first_unrecognised_character() {
        let options = PipelineOptions {
            lex_policy: LexPolicy::ContinueAndReport,
            file: String::from("demo.tac"),
        };

        let error = compile_source("x = 1 @; y = #;", &options).unwrap_err();
        assert_eq!(error.get_position().0, 6);
    }

    #[test]
    fn test_continue_policy_keeps_tokenizing() {
        let options = PipelineOptions {
            lex_policy: LexPolicy::ContinueAndReport,
            file: String::from("demo.tac"),
        };

        let tokenized = tokenize_source("x = 1 @;", &options).unwrap();
        assert_eq!(tokenized.tokens.len(), 4);
        assert_eq!(tokenized.unrecognised.len(), 1);
    }

    #[test]
    fn test_diagnostics_do_not_block_lowering() {
        let compilation = compile_source("if (a) { x = 1; x = 2; }", &PipelineOptions::default()).unwrap();

        assert_eq!(compilation.analysis.diagnostics.len(), 2);
        assert_eq!(compilation.tac_lines().len(), 6);
    }
}

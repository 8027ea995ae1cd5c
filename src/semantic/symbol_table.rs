use std::{fmt::Display, slice::Iter};

use serde::{Deserialize, Serialize};

use crate::errors::errors::SemanticWarning;

/// Scope tag of everything outside a control structure.
pub const GLOBAL_SCOPE: &str = "global";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Variable,
    Function,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Function => write!(f, "function"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    pub scope: String,
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) in {}", self.name, self.kind, self.scope)
    }
}

/// Append-only symbol table with a flat scope tag.
///
/// Scopes do not nest: `enter_scope` replaces the current tag and
/// `exit_scope` always returns to [`GLOBAL_SCOPE`], whatever was entered
/// before.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    current_scope: String,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: vec![],
            current_scope: String::from(GLOBAL_SCOPE),
        }
    }

    pub fn enter_scope(&mut self, scope: &str) {
        self.current_scope = scope.to_string();
    }

    pub fn exit_scope(&mut self) {
        self.current_scope = String::from(GLOBAL_SCOPE);
    }

    pub fn current_scope(&self) -> &str {
        &self.current_scope
    }

    pub fn is_global(&self) -> bool {
        self.current_scope == GLOBAL_SCOPE
    }

    /// Records `name` in the current scope unless the scope already has it.
    pub fn declare(&mut self, name: &str, kind: SymbolKind) -> Result<(), SemanticWarning> {
        if self.lookup(name, &self.current_scope).is_some() {
            Err(SemanticWarning::DuplicateDeclaration {
                name: name.to_string(),
                scope: self.current_scope.clone(),
            })
        } else {
            self.entries.push(SymbolEntry {
                name: name.to_string(),
                kind,
                scope: self.current_scope.clone(),
            });
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str, scope: &str) -> Option<&SymbolEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && entry.scope == scope)
    }

    /// True if `name` is declared in any scope.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

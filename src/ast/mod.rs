/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The tagged node type shared by every stage
/// - interchange: JSON externalization of trees
pub mod ast;
pub mod interchange;

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed node families (`Stmt`, `Expr`, `Type`)
/// - expressions: Definitions for various expression nodes
/// - statements: Definitions for various statement nodes
/// - types: Definitions for type annotations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

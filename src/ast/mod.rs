/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the closed statement/expression enums
/// - expressions: Identifier references and literals
/// - statements: Header, declarations and the three statement kinds
/// - types: Value types, runtime values and coercion between them
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

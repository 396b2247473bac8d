/// AST (Abstract Syntax Tree) module
/// Contains all definitions produced by the parser
///
/// Submodules:
/// - expressions: Literal values, operators and expression kinds
/// - statements: Top level statements and variable declarations
/// - types: Declared type names usable in annotations
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;

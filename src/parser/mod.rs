//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! The parser works directly on characters; there is no tokenizer.
//! Each grammar production is a chumsky combinator:
//!
//! - Whitespace skipping fused into every terminal (`lexeme`)
//! - Literals, identifiers and type annotations
//! - Binary operators, chained left to right with no precedence
//! - Variable declarations and top level statements

pub mod expr;
pub mod identifier;
pub mod lexeme;
pub mod literals;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

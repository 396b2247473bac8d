//! Error types and error handling for the parser.
//!
//! This module defines the error types returned by the parser entry
//! points. It includes:
//!
//! - Error structures with source position information
//! - The failure variants a parse can end with
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;

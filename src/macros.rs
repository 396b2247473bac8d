//! Utility macros for the parser.
//!
//! This module defines helper macros used throughout the grammar:
//!
//! - `MK_KEYWORD!` - Matches fixed source text as a lexeme and yields a value
//!
//! These macros reduce boilerplate in the keyword and operator tables.

/// Matches a fixed piece of source text, swallows the whitespace after it,
/// and produces the given value.
///
/// # Arguments
///
/// * `$text` - The exact text to match
/// * `$value` - The value produced on a match (must be `Clone`)
///
/// # Example
///
/// ```ignore
/// let boolean = choice((
///     MK_KEYWORD!("true", Type::Bool(true)),
///     MK_KEYWORD!("false", Type::Bool(false)),
/// ));
/// ```
#[macro_export]
macro_rules! MK_KEYWORD {
    ($text:literal, $value:expr) => {
        $crate::parser::lexeme::lexeme(::chumsky::primitive::just($text)).to($value)
    };
}

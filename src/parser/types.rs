//! Type annotation parsing.
//!
//! A type annotation is one of a fixed set of keywords. No keyword in the
//! set is a prefix of another, so the order of the alternatives is free.

use chumsky::prelude::*;

use crate::{ast::types::TypeName, MK_KEYWORD};

use super::lexeme::ParserError;

pub fn type_name() -> impl Parser<char, TypeName, Error = ParserError> + Clone {
    choice((
        MK_KEYWORD!("int", TypeName::Int),
        MK_KEYWORD!("float", TypeName::Float),
        MK_KEYWORD!("bool", TypeName::Bool),
        MK_KEYWORD!("string", TypeName::String),
        MK_KEYWORD!("point", TypeName::Point),
        MK_KEYWORD!("vector", TypeName::Vector),
        MK_KEYWORD!("matrix", TypeName::Matrix),
    ))
    .labelled("type name")
}

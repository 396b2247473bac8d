//! Operator table.
//!
//! Maps every binary operator token to the constructor that combines two
//! operands. Two-character operators come before any one-character
//! operator that is their prefix, so `//`, `==`, `!=`, `>=`, `<=`, `&&`
//! and `||` always win over `/`, `>`, `<`, `&` and `|`.

use chumsky::prelude::*;

use crate::{
    ast::expressions::{Expression, Operation},
    MK_KEYWORD,
};

use super::lexeme::ParserError;

/// Builds an operation from its left and right operand.
pub type Combine = fn(Box<Expression>, Box<Expression>) -> Operation;

pub fn operator() -> impl Parser<char, Combine, Error = ParserError> + Clone {
    choice((
        MK_KEYWORD!("//", Operation::IntDivide as Combine),
        MK_KEYWORD!("==", Operation::Equals as Combine),
        MK_KEYWORD!("!=", Operation::NotEquals as Combine),
        MK_KEYWORD!(">=", Operation::GreaterThanEq as Combine),
        MK_KEYWORD!("<=", Operation::LessThanEq as Combine),
        MK_KEYWORD!("&&", Operation::And as Combine),
        MK_KEYWORD!("||", Operation::Or as Combine),
        MK_KEYWORD!("+", Operation::Add as Combine),
        MK_KEYWORD!("-", Operation::Subtract as Combine),
        MK_KEYWORD!("*", Operation::Multiply as Combine),
        MK_KEYWORD!("/", Operation::Divide as Combine),
        MK_KEYWORD!(">", Operation::GreaterThan as Combine),
        MK_KEYWORD!("<", Operation::LessThan as Combine),
        MK_KEYWORD!("&", Operation::BitwiseAnd as Combine),
        MK_KEYWORD!("|", Operation::BitwiseOr as Combine),
        MK_KEYWORD!("^", Operation::BitwiseXor as Combine),
    ))
}

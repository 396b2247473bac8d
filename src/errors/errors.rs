use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at position {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
        }
    }

    /// The construct the parser was looking for when it failed.
    pub fn expected(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { expected, .. }
            | ErrorImpl::UnexpectedEndOfInput { expected } => Some(expected),
            ErrorImpl::InvalidLiteral { .. } => None,
        }
    }

    /// A one-line hint shown next to the error name.
    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { found, expected } => {
                format!("Unexpected character: `{}`, expected {}", found, expected)
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                format!("Input ended early, expected {}", expected)
            }
            ErrorImpl::InvalidLiteral { literal } => format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character {found:?}, expected {expected}")]
    UnexpectedCharacter { found: char, expected: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("error parsing number: {literal:?}")]
    InvalidLiteral { literal: String },
}

//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            found: '@',
            expected: "expression".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.expected(), Some("expression"));
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "';'".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_invalid_literal_error() {
    let error = Error::new(
        ErrorImpl::InvalidLiteral {
            literal: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidLiteral");
    assert_eq!(error.expected(), None);
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            found: '}',
            expected: "expression".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert!(error.get_tip().contains("`}`"));
}

#[test]
fn test_every_error_has_a_tip() {
    let file = Rc::new("test.lang".to_string());
    let errors = [
        ErrorImpl::UnexpectedCharacter {
            found: '?',
            expected: "expression".to_string(),
        },
        ErrorImpl::UnexpectedEndOfInput {
            expected: "';'".to_string(),
        },
        ErrorImpl::InvalidLiteral {
            literal: "99999999999999999999".to_string(),
        },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, Position(0, Rc::clone(&file)));
        assert!(!error.get_tip().is_empty());
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "expression".to_string(),
        },
        Position(7, Rc::new("test.lang".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "unexpected end of input, expected expression at position 7"
    );
}

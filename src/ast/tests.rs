//! Unit tests for the AST helpers.

use super::{
    expressions::{Expression, Operation, Type},
    statements::Declaration,
    types::TypeName,
};

fn int(value: i64) -> Box<Expression> {
    Box::new(Expression::Type(Type::Int(value)))
}

#[test]
fn test_type_name_keywords() {
    assert_eq!(TypeName::Int.keyword(), "int");
    assert_eq!(TypeName::Float.keyword(), "float");
    assert_eq!(TypeName::Bool.keyword(), "bool");
    assert_eq!(TypeName::String.keyword(), "string");
    assert_eq!(TypeName::Point.keyword(), "point");
    assert_eq!(TypeName::Vector.keyword(), "vector");
    assert_eq!(TypeName::Matrix.to_string(), "matrix");
}

#[test]
fn test_operation_operands() {
    let operation = Operation::Subtract(int(1), int(2));
    let (left, right) = operation.operands();

    assert_eq!(*left, Expression::Type(Type::Int(1)));
    assert_eq!(*right, Expression::Type(Type::Int(2)));
}

#[test]
fn test_operation_symbols() {
    assert_eq!(Operation::IntDivide(int(1), int(2)).symbol(), "//");
    assert_eq!(Operation::NotEquals(int(1), int(2)).symbol(), "!=");
    assert_eq!(Operation::BitwiseXor(int(1), int(2)).symbol(), "^");
}

#[test]
fn test_declaration_name() {
    let declaration = Declaration::Variable {
        name: "speed".to_string(),
        type_name: Some(TypeName::Float),
        initializer: None,
    };

    assert_eq!(declaration.name(), "speed");
}

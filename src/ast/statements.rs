use super::{expressions::Expression, types::TypeName};

/// Statement
///
/// The result of parsing one top level statement: either a declaration
/// or a bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Expression(Expression),
}

/// Declaration
///
/// `let <name> (: <type>)? (= <expr>)? ;`
///
/// The type annotation and the initializer are independent; all four
/// combinations are valid.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Variable {
        name: String,
        type_name: Option<TypeName>,
        initializer: Option<Expression>,
    },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Variable { name, .. } => name,
        }
    }
}

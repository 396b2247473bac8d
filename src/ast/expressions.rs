// LITERALS

/// Literal value
/// The primitive values that can be written directly in source.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

// EXPRESSIONS

/// Expression
/// Represents any expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Type(Type),
    VarIdentifier(String),
    Parentheses(Box<Expression>),
    Operation(Operation),
}

/// Binary Operation
/// Each variant holds its left and right operand, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    IntDivide(Box<Expression>, Box<Expression>),
    GreaterThan(Box<Expression>, Box<Expression>),
    LessThan(Box<Expression>, Box<Expression>),
    Equals(Box<Expression>, Box<Expression>),
    NotEquals(Box<Expression>, Box<Expression>),
    GreaterThanEq(Box<Expression>, Box<Expression>),
    LessThanEq(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    BitwiseAnd(Box<Expression>, Box<Expression>),
    BitwiseOr(Box<Expression>, Box<Expression>),
    BitwiseXor(Box<Expression>, Box<Expression>),
}

impl Operation {
    /// Returns the left and right operands.
    pub fn operands(&self) -> (&Expression, &Expression) {
        match self {
            Operation::Add(left, right)
            | Operation::Subtract(left, right)
            | Operation::Multiply(left, right)
            | Operation::Divide(left, right)
            | Operation::IntDivide(left, right)
            | Operation::GreaterThan(left, right)
            | Operation::LessThan(left, right)
            | Operation::Equals(left, right)
            | Operation::NotEquals(left, right)
            | Operation::GreaterThanEq(left, right)
            | Operation::LessThanEq(left, right)
            | Operation::And(left, right)
            | Operation::Or(left, right)
            | Operation::BitwiseAnd(left, right)
            | Operation::BitwiseOr(left, right)
            | Operation::BitwiseXor(left, right) => (left, right),
        }
    }

    /// Returns the source token of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add(..) => "+",
            Operation::Subtract(..) => "-",
            Operation::Multiply(..) => "*",
            Operation::Divide(..) => "/",
            Operation::IntDivide(..) => "//",
            Operation::GreaterThan(..) => ">",
            Operation::LessThan(..) => "<",
            Operation::Equals(..) => "==",
            Operation::NotEquals(..) => "!=",
            Operation::GreaterThanEq(..) => ">=",
            Operation::LessThanEq(..) => "<=",
            Operation::And(..) => "&&",
            Operation::Or(..) => "||",
            Operation::BitwiseAnd(..) => "&",
            Operation::BitwiseOr(..) => "|",
            Operation::BitwiseXor(..) => "^",
        }
    }
}

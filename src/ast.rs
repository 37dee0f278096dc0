use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    #[display(fmt = "-")]
    Negate,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
    #[display(fmt = "**")]
    Pow,
}

/// A parsed expression. Every node owns its children, so a value of this
/// type is always a complete tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    /// A bare identifier, looked up in the constant table during evaluation.
    Constant(String),
    UnaryOp(UnaryOp, Box<Expression>),
    BinaryOp(Box<Expression>, BinaryOp, Box<Expression>),
    Factorial(Box<Expression>),
    /// An identifier directly followed by a parenthesized argument.
    FnCall(String, Box<Expression>),
}

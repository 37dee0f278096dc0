use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown constant `{0}`")]
    UnknownIdentifier(String),

    #[error("Unknown function `{0}`")]
    UnknownFunction(String),

    #[error("Function `{0}` is not defined for value `{1}`")]
    DomainError(String, f64),

    #[error("Factorial only accepts non-negative integers, received `{0}`")]
    InvalidFactorialOperand(f64),
}

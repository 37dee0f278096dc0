use thiserror::Error;

use crate::interpret::EvalError;
use crate::parse::{LexError, ParseError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Character offset in the input the error points at. Evaluation errors
    /// are about values, not places, and have none.
    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::Lex(e) => Some(e.position),
            CalcError::Parse(e) => Some(e.position),
            CalcError::Eval(_) => None,
        }
    }
}

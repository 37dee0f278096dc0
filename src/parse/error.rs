use crate::token::Token;
use derive_more::Display;
use thiserror::Error;

/// Deepest expression tree the parser builds. Evaluating and dropping the
/// tree recurse once per level, so this also bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unexpected character `{character}` in position {position}")]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

/// What the parser was looking for when it gave up.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    #[display(fmt = "an expression")]
    Expression,
    #[display(fmt = "`)`")]
    ClosingParen,
    #[display(fmt = "end of input")]
    EndOfInput,
    #[display(fmt = "a valid number")]
    ValidNumber,
    #[display(fmt = "at most {} levels of nesting", MAX_NESTING_DEPTH)]
    ShallowerNesting,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Expected {expected} at position {position}, found `{found}`")]
pub struct ParseError {
    pub position: usize,
    pub expected: Expectation,
    pub found: Token,
}

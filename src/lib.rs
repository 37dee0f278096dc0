//! A calculator for untrusted input.
//!
//! Expressions are lexed, parsed into an [`Expression`] tree and evaluated
//! by walking that tree. Only the arithmetic operators, the factorial and a
//! fixed table of constants and single argument functions are understood,
//! so nothing in the input can reach anything else.
//!
//! ```
//! assert_eq!(simplecalc::calc("3 * 5!").unwrap(), "360");
//! assert_eq!(simplecalc::calc("sin(pi / 2)").unwrap(), "1");
//! ```

mod ast;
mod error;
mod format;
mod interpret;
mod parse;
mod span;
mod token;

use log::debug;

pub use ast::{BinaryOp, Expression, UnaryOp};
pub use error::CalcError;
pub use format::{format, format_with, FormatOptions, DEFAULT_SIGNIFICANT_DIGITS};
pub use interpret::{evaluate, factorial, Builtin, Domain, EvalError, CONSTANTS, FUNCTIONS};
pub use parse::{lex, parse, Expectation, LexError, LexItem, ParseError};
pub use span::Span;
pub use token::Token;

/// Evaluates `expression` and renders the result with [`format`].
pub fn calc(expression: &str) -> Result<String, CalcError> {
    calc_with(expression, &FormatOptions::default())
}

/// Same as [`calc`] with explicit output options.
pub fn calc_with(expression: &str, options: &FormatOptions) -> Result<String, CalcError> {
    let tokens = lex(expression)?;
    for token in &tokens {
        debug!("{} - {:?}", token.span, token.token);
    }

    let expr = parse(expression, &tokens)?;
    debug!("{:?}", &expr);

    let value = evaluate(&expr)?;
    Ok(format_with(value, options))
}

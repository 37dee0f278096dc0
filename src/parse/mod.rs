mod context;
mod error;
mod lex;
mod parser;

pub use error::{Expectation, LexError, ParseError};
pub use lex::{lex, LexItem};
pub use parser::parse;

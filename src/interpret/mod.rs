mod error;
mod interpreter;
mod prelude;

pub use error::EvalError;
pub use interpreter::evaluate;
pub use prelude::{factorial, Builtin, Domain, CONSTANTS, FUNCTIONS};

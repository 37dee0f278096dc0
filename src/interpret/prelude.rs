use std::f64::consts;

use phf::phf_map;

use super::error::EvalError;

/// Named values an expression may refer to. Keys are lowercase.
pub static CONSTANTS: phf::Map<&'static str, f64> = phf_map! {
    "pi" => consts::PI,
    "e" => consts::E,
    "tau" => consts::TAU,
};

/// Single argument functions an expression may call. Keys are lowercase.
pub static FUNCTIONS: phf::Map<&'static str, Builtin> = phf_map! {
    "abs" => Builtin::Total(f64::abs),
    "acos" => Builtin::Partial(Domain::ClosedUnit, f64::acos),
    "acosh" => Builtin::Partial(Domain::AtLeastOne, f64::acosh),
    "asin" => Builtin::Partial(Domain::ClosedUnit, f64::asin),
    "asinh" => Builtin::Total(f64::asinh),
    "atan" => Builtin::Total(f64::atan),
    "atanh" => Builtin::Partial(Domain::OpenUnit, f64::atanh),
    "ceil" => Builtin::Total(f64::ceil),
    "cos" => Builtin::Total(f64::cos),
    "cosh" => Builtin::Total(f64::cosh),
    "degrees" => Builtin::Total(f64::to_degrees),
    "exp" => Builtin::Total(f64::exp),
    "factorial" => Builtin::Factorial,
    "floor" => Builtin::Total(f64::floor),
    "int" => Builtin::Total(f64::trunc),
    "ln" => Builtin::Partial(Domain::Positive, f64::ln),
    "log" => Builtin::Partial(Domain::Positive, f64::log10),
    "log10" => Builtin::Partial(Domain::Positive, f64::log10),
    "log2" => Builtin::Partial(Domain::Positive, f64::log2),
    "radians" => Builtin::Total(f64::to_radians),
    "round" => Builtin::Total(f64::round),
    "sin" => Builtin::Total(f64::sin),
    "sinh" => Builtin::Total(f64::sinh),
    "sqrt" => Builtin::Partial(Domain::NonNegative, f64::sqrt),
    "tan" => Builtin::Total(f64::tan),
    "tanh" => Builtin::Total(f64::tanh),
    "trunc" => Builtin::Total(f64::trunc),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    NonNegative,
    Positive,
    AtLeastOne,
    // [-1, 1]
    ClosedUnit,
    // (-1, 1)
    OpenUnit,
}

impl Domain {
    pub fn contains(self, x: f64) -> bool {
        match self {
            Domain::NonNegative => x >= 0.0,
            Domain::Positive => x > 0.0,
            Domain::AtLeastOne => x >= 1.0,
            Domain::ClosedUnit => (-1.0..=1.0).contains(&x),
            Domain::OpenUnit => x > -1.0 && x < 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    /// Defined for every real argument.
    Total(fn(f64) -> f64),
    Partial(Domain, fn(f64) -> f64),
    Factorial,
}

impl Builtin {
    pub fn call(self, name: &str, arg: f64) -> Result<f64, EvalError> {
        match self {
            Builtin::Total(f) => Ok(f(arg)),
            Builtin::Partial(domain, f) => {
                if !domain.contains(arg) {
                    return Err(EvalError::DomainError(name.to_string(), arg));
                }
                Ok(f(arg))
            }
            Builtin::Factorial => factorial(arg),
        }
    }
}

pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn lookup_function(name: &str) -> Option<Builtin> {
    FUNCTIONS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Product of `1..=n` in floating point. Past `170!` the product is
/// infinite and the loop stops there.
pub fn factorial(n: f64) -> Result<f64, EvalError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(EvalError::InvalidFactorialOperand(n));
    }

    let mut result: f64 = 1.0;
    let mut i: f64 = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

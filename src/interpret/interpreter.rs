use log::trace;

use super::error::EvalError;
use super::prelude;
use crate::ast::{BinaryOp, Expression, UnaryOp};

/// Computes the value of a parsed expression.
///
/// Only the operators in [`BinaryOp`] and [`UnaryOp`], the factorial and the
/// names known to the prelude tables can be evaluated; anything else in the
/// tree is rejected with an [`EvalError`]. Floating point results that are
/// not finite (`1 / 0`, `171!`) are returned as is.
pub fn evaluate(expr: &Expression) -> Result<f64, EvalError> {
    interpret_expr(expr)
}

fn interpret_expr(expr: &Expression) -> Result<f64, EvalError> {
    match expr {
        Expression::Number(value) => Ok(*value),
        Expression::Constant(name) => interpret_constant(name),
        Expression::UnaryOp(op, operand) => interpret_unary_op(*op, operand),
        Expression::BinaryOp(lhs, op, rhs) => interpret_binary_op(lhs, *op, rhs),
        Expression::Factorial(operand) => prelude::factorial(interpret_expr(operand)?),
        Expression::FnCall(name, arg) => interpret_fn_call(name, arg),
    }
}

fn interpret_constant(name: &str) -> Result<f64, EvalError> {
    prelude::lookup_constant(name)
        .ok_or_else(|| EvalError::UnknownIdentifier(name.to_string()))
}

fn interpret_unary_op(op: UnaryOp, operand: &Expression) -> Result<f64, EvalError> {
    let value = interpret_expr(operand)?;
    match op {
        UnaryOp::Negate => Ok(-value),
    }
}

fn interpret_binary_op(
    lhs: &Expression,
    op: BinaryOp,
    rhs: &Expression,
) -> Result<f64, EvalError> {
    let l = interpret_expr(lhs)?;
    let r = interpret_expr(rhs)?;
    let result = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => l / r,
        BinaryOp::Pow => l.powf(r),
    };
    Ok(result)
}

fn interpret_fn_call(name: &str, arg: &Expression) -> Result<f64, EvalError> {
    // an unknown name is reported before its argument is looked at
    let builtin = prelude::lookup_function(name)
        .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
    let value = interpret_expr(arg)?;
    let result = builtin.call(name, value)?;
    trace!("{}({}) = {}", name, value, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{lex, parse};
    use pretty_assertions::assert_eq;
    use std::f64::consts;

    fn eval(input: &str) -> Result<f64, EvalError> {
        let items = lex(input).unwrap();
        let expr = parse(input, &items).unwrap();
        evaluate(&expr)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval("7 / 2"), Ok(3.5));
        assert_eq!(eval("3 -7"), Ok(-4.0));
        assert_eq!(eval("2 - -2"), Ok(4.0));
    }

    #[test]
    fn powers() {
        assert_eq!(eval("2**3**2"), Ok(512.0));
        assert_eq!(eval("-2**2"), Ok(-4.0));
        assert_eq!(eval("(-2)**2"), Ok(4.0));
        assert_eq!(eval("2 ** -2"), Ok(0.25));
        assert_eq!(eval("144 ** 0.5"), Ok(12.0));
    }

    #[test]
    fn factorials() {
        assert_eq!(eval("3 * 5!"), Ok(360.0));
        assert_eq!(eval("-5!"), Ok(-120.0));
        assert_eq!(eval("3!!"), Ok(720.0));
        assert_eq!(eval("(-1)!"), Err(EvalError::InvalidFactorialOperand(-1.0)));
        assert_eq!(eval("2.5!"), Err(EvalError::InvalidFactorialOperand(2.5)));
        assert_eq!(eval("factorial(16)"), Ok(20922789888000.0));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(eval("1 / 0"), Ok(f64::INFINITY));
        assert_eq!(eval("-1 / 0"), Ok(f64::NEG_INFINITY));
        assert!(eval("0 / 0").unwrap().is_nan());
    }

    #[test]
    fn constants() {
        assert_eq!(eval("pi"), Ok(consts::PI));
        assert_eq!(eval("E"), Ok(consts::E));
        assert_eq!(eval("sin(pi / 2)"), Ok(1.0));
        assert_eq!(eval("bar"), Err(EvalError::UnknownIdentifier("bar".to_string())));
    }

    #[test]
    fn functions() {
        assert_eq!(eval("2 * log(100)"), Ok(4.0));
        assert_eq!(eval("ceil(6.1)"), Ok(7.0));
        assert_eq!(eval("floor(1.7)"), Ok(1.0));
        assert_eq!(eval("log2(64)"), Ok(6.0));
        assert_eq!(eval("abs(-55)"), Ok(55.0));
        assert_eq!(eval("3 * 5! + ceil(sqrt(123) / ln(10))"), Ok(368.0));
    }

    #[test]
    fn function_errors() {
        assert_eq!(eval("foo(1)"), Err(EvalError::UnknownFunction("foo".to_string())));
        // the name is checked first, even when the argument would fail too
        assert_eq!(eval("foo(bar)"), Err(EvalError::UnknownFunction("foo".to_string())));
        assert_eq!(
            eval("sqrt(-4)"),
            Err(EvalError::DomainError("sqrt".to_string(), -4.0))
        );
        assert_eq!(
            eval("log(0)"),
            Err(EvalError::DomainError("log".to_string(), 0.0))
        );
    }

    #[test]
    fn constant_is_not_callable() {
        assert_eq!(eval("pi(2)"), Err(EvalError::UnknownFunction("pi".to_string())));
    }

    #[test]
    fn function_name_alone_is_unknown_constant() {
        assert_eq!(eval("sqrt"), Err(EvalError::UnknownIdentifier("sqrt".to_string())));
    }
}

use crate::ast::{BinaryOp, Expression, UnaryOp};

use super::context::Context;
use super::error::{Expectation, ParseError};
use super::lex::LexItem;

use crate::token::Token;

/// Builds the expression tree for `items`, which must have been produced by
/// [`lex`](super::lex) from the same `input`. The whole token list has to be
/// consumed, leftover tokens are an error.
pub fn parse(input: &str, items: &[LexItem]) -> Result<Expression, ParseError> {
    let mut state = Context::new(input, items);
    let expr = parse_expr(&mut state)?;
    if !state.is_at_end() {
        return Err(state.unexpected(Expectation::EndOfInput));
    }
    Ok(expr)
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_term(state)
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[(Token::Plus, BinaryOp::Add), (Token::Minus, BinaryOp::Sub)],
        parse_factor,
    )
}

const FACTOR_OPS: &[(Token, BinaryOp)] =
    &[(Token::Star, BinaryOp::Mul), (Token::Slash, BinaryOp::Div)];

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, FACTOR_OPS, parse_unary)
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_ops: &'static [(Token, BinaryOp)],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let lhs = lower_fn(state)?;
    continue_recursive_binary(state, lhs, match_ops, lower_fn)
}

fn continue_recursive_binary<F>(
    state: &mut Context,
    mut lhs: Expression,
    match_ops: &'static [(Token, BinaryOp)],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    // every operator puts the tree built so far one level further down
    let depth = state.depth();
    loop {
        let curr = state.get_curr().token;
        let Some(&(_, op)) = match_ops.iter().find(|(token, _)| *token == curr) else {
            break;
        };
        state.enter()?;
        state.advance();
        let rhs = lower_fn(state)?;
        lhs = Expression::BinaryOp(Box::new(lhs), op, Box::new(rhs));
    }
    state.restore_depth(depth);

    Ok(lhs)
}

// Prefix signs bind looser than `**`, so `-2**2` is `-(2**2)`.
fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    let negate = match state.get_curr().token {
        Token::Minus => true,
        Token::Plus => false,
        _ => return parse_power(state),
    };
    let depth = state.enter()?;
    state.advance();
    let operand = parse_unary(state)?;
    state.restore_depth(depth);
    if negate {
        Ok(Expression::UnaryOp(UnaryOp::Negate, Box::new(operand)))
    } else {
        Ok(operand)
    }
}

// Right associative: the exponent goes back up through `parse_unary`, which
// also lets it carry its own sign (`2**-1`).
fn parse_power(state: &mut Context) -> Result<Expression, ParseError> {
    let base = parse_postfix(state)?;
    if !state.peek(&[Token::StarStar]) {
        return Ok(base);
    }
    let depth = state.enter()?;
    state.advance();
    let exponent = parse_unary(state)?;
    state.restore_depth(depth);
    Ok(Expression::BinaryOp(
        Box::new(base),
        BinaryOp::Pow,
        Box::new(exponent),
    ))
}

fn parse_postfix(state: &mut Context) -> Result<Expression, ParseError> {
    let mut expr = parse_primary(state)?;
    let depth = state.depth();
    while state.peek(&[Token::Bang]) {
        state.enter()?;
        state.advance();
        expr = Expression::Factorial(Box::new(expr));
    }
    state.restore_depth(depth);
    Ok(expr)
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr();
    match li.token {
        Token::Number => parse_number(state),
        Token::Identifier => parse_identifier_or_call(state),
        Token::LeftParen => parse_group(state),
        _ => Err(state.unexpected(Expectation::Expression)),
    }
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    let depth = state.enter()?;
    state.consume_token(Token::LeftParen, Expectation::Expression)?;
    let expr = parse_expr(state)?;
    state.consume_token(Token::RightParen, Expectation::ClosingParen)?;
    state.restore_depth(depth);
    Ok(expr)
}

fn parse_identifier_or_call(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.consume_token(Token::Identifier, Expectation::Expression)?;
    let name = state.string_from_span(li.span);
    if !state.peek(&[Token::LeftParen]) {
        return Ok(Expression::Constant(name));
    }
    // a call swallows the `*` and `/` operands right after its parens:
    // `sqrt(123) / ln(10)` is `sqrt((123) / ln(10))`
    let group = parse_group(state)?;
    let argument = continue_recursive_binary(state, group, FACTOR_OPS, parse_unary)?;
    Ok(Expression::FnCall(name, Box::new(argument)))
}

fn parse_number(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.consume_token(Token::Number, Expectation::Expression)?;
    let source = state.string_from_span(li.span);
    match source.parse::<f64>() {
        Err(_) => Err(ParseError {
            position: li.span.start,
            expected: Expectation::ValidNumber,
            found: li.token,
        }),
        Ok(num) => Ok(Expression::Number(num)),
    }
}

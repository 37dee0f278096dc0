use super::error::LexError;

use crate::span::Span;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Splits `input` into tokens. The returned list always ends with a single
/// [`Token::End`] placed one past the last character.
pub fn lex(input: &str) -> Result<Vec<LexItem>, LexError> {
    let chars = input.chars().collect::<Vec<char>>();
    let mut curr_offset = 0;
    let mut result = vec![];

    while let Some(&c) = chars.get(curr_offset) {
        match c {
            '(' => result.push(LexItem::new(Token::LeftParen, Span::one(curr_offset))),
            ')' => result.push(LexItem::new(Token::RightParen, Span::one(curr_offset))),
            '+' => result.push(LexItem::new(Token::Plus, Span::one(curr_offset))),
            '-' => result.push(LexItem::new(Token::Minus, Span::one(curr_offset))),
            '/' => result.push(LexItem::new(Token::Slash, Span::one(curr_offset))),
            '!' => result.push(LexItem::new(Token::Bang, Span::one(curr_offset))),
            '*' => {
                if chars.get(curr_offset + 1) == Some(&'*') {
                    result.push(LexItem::new(Token::StarStar, Span::two(curr_offset)));
                    curr_offset += 1;
                } else {
                    result.push(LexItem::new(Token::Star, Span::one(curr_offset)));
                }
            }
            c if c.is_whitespace() => {
                // skip
            }
            c if c.is_ascii_digit() => result.push(lex_number(&chars, &mut curr_offset)),
            '.' if next_is_digit(&chars, curr_offset) => {
                result.push(lex_number(&chars, &mut curr_offset))
            }
            c if is_identifier_start(c) => result.push(lex_identifier(&chars, &mut curr_offset)),
            character => {
                return Err(LexError {
                    position: curr_offset,
                    character,
                })
            }
        }
        curr_offset += 1;
    }

    result.push(LexItem::new(Token::End, Span::one(chars.len())));
    Ok(result)
}

fn next_is_digit(chars: &[char], offset: usize) -> bool {
    chars
        .get(offset + 1)
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
}

fn consume_digits(chars: &[char], offset: &mut usize) {
    while next_is_digit(chars, *offset) {
        *offset += 1;
    }
}

// On return `offset` points at the last character of the number.
fn lex_number(chars: &[char], offset: &mut usize) -> LexItem {
    let start_offset = *offset;
    let starts_with_dot = chars[start_offset] == '.';

    consume_digits(chars, offset);

    if !starts_with_dot && chars.get(*offset + 1) == Some(&'.') {
        *offset += 1;
        consume_digits(chars, offset);
    }

    // the exponent only belongs to the number when digits follow it,
    // otherwise `e` starts an identifier
    if let Some('e' | 'E') = chars.get(*offset + 1) {
        let sign_len = match chars.get(*offset + 2) {
            Some('+' | '-') => 1,
            _ => 0,
        };
        if next_is_digit(chars, *offset + 1 + sign_len) {
            *offset += 1 + sign_len;
            consume_digits(chars, offset);
        }
    }

    LexItem::new(Token::Number, Span::new(start_offset, *offset))
}

fn lex_identifier(chars: &[char], offset: &mut usize) -> LexItem {
    let start_offset = *offset;

    while let Some(&c) = chars.get(*offset + 1) {
        if !is_identifier_char(c) {
            break;
        }
        *offset += 1;
    }

    LexItem::new(Token::Identifier, Span::new(start_offset, *offset))
}

use crate::span::Span;
use crate::token::Token;

use super::error::{Expectation, ParseError, MAX_NESTING_DEPTH};
use super::lex::LexItem;

pub struct Context<'a> {
    // spans count characters, so the source is kept indexable by them
    chars: Vec<char>,
    items: &'a [LexItem],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(input: &str, items: &'a [LexItem]) -> Self {
        Self {
            chars: input.chars().collect(),
            items,
            curr_pos: 0,
            depth: 0,
        }
    }

    /// Goes one level deeper into the tree being built. Returns the depth to
    /// hand back to [`Context::restore_depth`] once the level is done.
    pub fn enter(&mut self) -> Result<usize, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected(Expectation::ShallowerNesting));
        }
        self.depth += 1;
        Ok(self.depth - 1)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn is_at_end(&self) -> bool {
        self.peek(&[Token::End]) || self.curr_pos >= self.items.len()
    }

    pub fn consume_token(
        &mut self,
        token: Token,
        expected: Expectation,
    ) -> Result<LexItem, ParseError> {
        let li = self.get_curr();
        if li.token != token {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(li)
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn peek(&self, match_tokens: &'static [Token]) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|li| match_tokens.contains(&li.token))
            .unwrap_or(false)
    }

    // Past the last item behaves as if the `End` token repeated forever, so a
    // token list without one is still handled.
    pub fn get_curr(&self) -> LexItem {
        match self.items.get(self.curr_pos) {
            Some(li) => *li,
            None => LexItem::new(Token::End, Span::one(self.chars.len())),
        }
    }

    pub fn unexpected(&self, expected: Expectation) -> ParseError {
        let li = self.get_curr();
        ParseError {
            position: li.span.start,
            expected,
            found: li.token,
        }
    }

    pub fn string_from_span(&self, span: Span) -> String {
        let end = (span.end + 1).min(self.chars.len());
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }
}

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "[{}:{}]", start, end)]
pub struct Span {
    // inclusive range, counted in characters
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    pub fn two(start: usize) -> Self {
        Span {
            start,
            end: start + 1,
        }
    }

    pub fn string_from_source(&self, input: &str) -> String {
        input
            .chars()
            .skip(self.start)
            .take(self.end + 1 - self.start)
            .collect()
    }
}

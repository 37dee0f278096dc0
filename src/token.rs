use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[display(fmt = "(")]
    LeftParen,
    #[display(fmt = ")")]
    RightParen,

    #[display(fmt = "number")]
    Number,
    #[display(fmt = "identifier")]
    Identifier,

    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "**")]
    StarStar,
    #[display(fmt = "/")]
    Slash,
    #[display(fmt = "!")]
    Bang,

    #[display(fmt = "end of input")]
    End,
}

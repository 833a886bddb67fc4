use logos::{Lexer, Logos};
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is a sign, `+` or `-`.
    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Input the lexer cannot match is kept as [`TokenKind::Symbol`] tokens, so that the parser can
/// point at it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: kind.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();

        assert_eq!(actual, expected);
    }

    #[test]
    fn product() {
        compare_tokens(
            "(a+d) * e",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "a"),
                (TokenKind::Add, "+"),
                (TokenKind::Name, "d"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "e"),
            ],
        );
    }

    #[test]
    fn explicit_category() {
        compare_tokens(
            "-ae[double_3]",
            [
                (TokenKind::Sub, "-"),
                (TokenKind::Name, "ae"),
                (TokenKind::OpenBracket, "["),
                (TokenKind::Name, "double_3"),
                (TokenKind::CloseBracket, "]"),
            ],
        );
    }

    #[test]
    fn unknown_symbols() {
        compare_tokens(
            "a / 2",
            [
                (TokenKind::Name, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "/"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "2"),
            ],
        );
    }
}

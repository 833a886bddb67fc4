//! Parser for term notation.
//!
//! Term notation writes molecules and products the way the decomposition is written on paper:
//!
//! ```text
//! sum     := [sign] chain (sign chain)*
//! chain   := factor ('*' factor)*
//! factor  := '(' group ')' | atom
//! group   := [sign] atom (sign atom)*
//! atom    := NAME ['[' NAME ']']
//! ```
//!
//! The operands of a sum are restricted to the labels of the fixed [vocabulary](crate::vocab),
//! and take their category from it. The bracketed `label[category]` form is only accepted by
//! [`parse_molecule`], which reads back the [`Display`](std::fmt::Display) output of a
//! [`Molecule`].
//!
//! ```
//! use lastik_terms::parser::parse_sum;
//!
//! let products = parse_sum("(a + d) * (e + h) - (a + b) * h").unwrap();
//! assert_eq!(products.len(), 2);
//! assert_eq!(products[1].name, "(a + b) * h");
//! ```

pub mod ast;
pub mod error;

use ast::{Atom, Chain, Group, Sum};
use lastik_error::{Error, ErrorKind};
use crate::{
    molecule::Molecule,
    product::SignedProduct,
    term::Sign,
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use std::ops::Range;

/// Parses a sum of products and lowers it into signed products.
pub fn parse_sum(source: &str) -> Result<Vec<SignedProduct>, Vec<Error>> {
    let sum = Parser::new(source).try_parse_full(Parser::parse_sum).map_err(|err| vec![err])?;
    sum.lower(source)
}

/// Parses a single molecule written as a signed sum of atoms, such as `af[double_1] + bh[double_1]`.
///
/// The [`Display`](std::fmt::Display) output of a [`Molecule`] is accepted by this function.
pub fn parse_molecule(source: &str) -> Result<Molecule, Vec<Error>> {
    let group = Parser::new(source).try_parse_full(Parser::parse_group).map_err(|err| vec![err])?;
    group.lower()
}

/// A recursive descent parser over the tokens of term notation.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the given span.
    fn error_at(&self, span: Range<usize>, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![span], kind)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Moves the cursor past any whitespace.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).map_or(false, |token| token.kind.is_whitespace()) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without consuming it.
    fn peek(&mut self) -> Option<&Token<'source>> {
        self.skip_whitespace();
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the next non-whitespace token, then advances the cursor past it.
    ///
    /// Returns an EOF error if there are no more tokens.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor).cloned() {
            Some(token) => {
                self.cursor += 1;
                Ok(token)
            },
            None => Err(self.error_at(self.eof_span(), error::UnexpectedEof)),
        }
    }

    /// Consumes the next token, which must be of the given kind.
    fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
        let token = self.next_token()?;
        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(self.error_at(token.span, error::UnexpectedToken { expected, found: token.kind }))
        }
    }

    /// Consumes a leading `+` or `-` if there is one. Returns [`Sign::Positive`] otherwise.
    fn parse_leading_sign(&mut self) -> (Sign, Option<Range<usize>>) {
        match self.peek_kind() {
            Some(kind) if kind.is_sign() => {
                let token = &self.tokens[self.cursor];
                let span = token.span.clone();
                self.cursor += 1;
                (sign_of(kind), Some(span))
            },
            _ => (Sign::Positive, None),
        }
    }

    /// Parses the given syntax. All the tokens must be consumed; if not, an error pointing at the
    /// remaining input is returned.
    pub fn try_parse_full<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let value = parse(self)?;
        match self.peek().map(|token| token.span.start) {
            None => Ok(value),
            Some(start) => {
                let end = self.eof_span().end;
                Err(self.error_at(start..end, error::ExpectedEof))
            },
        }
    }

    /// Parses an atom: `NAME ['[' NAME ']']`.
    pub fn parse_atom(&mut self) -> Result<Atom, Error> {
        let name = self.expect(&[TokenKind::Name])?;
        let mut span = name.span.clone();

        let category = if self.peek_kind() == Some(TokenKind::OpenBracket) {
            let open = self.next_token()?;
            let category = self.expect(&[TokenKind::Name])?;
            match self.peek_kind() {
                Some(TokenKind::CloseBracket) => {
                    let close = self.next_token()?;
                    span.end = close.span.end;
                },
                _ => return Err(self.error_at(open.span, error::UnclosedBracket)),
            }
            Some(category.lexeme.to_string())
        } else {
            None
        };

        Ok(Atom {
            label: name.lexeme.to_string(),
            category,
            span,
        })
    }

    /// Parses a group: `[sign] atom (sign atom)*`.
    pub fn parse_group(&mut self) -> Result<Group, Error> {
        let (sign, sign_span) = self.parse_leading_sign();
        let first = self.parse_atom()?;
        let start = sign_span.map_or(first.span.start, |span| span.start);
        let mut end = first.span.end;
        let mut terms = vec![(sign, first)];

        while let Some(kind) = self.peek_kind().filter(|kind| kind.is_sign()) {
            self.cursor += 1;
            let atom = self.parse_atom()?;
            end = atom.span.end;
            terms.push((sign_of(kind), atom));
        }

        Ok(Group { terms, span: start..end })
    }

    /// Parses a factor: a parenthesized group, or a bare atom.
    pub fn parse_factor(&mut self) -> Result<Group, Error> {
        if self.peek_kind() != Some(TokenKind::OpenParen) {
            let atom = self.parse_atom()?;
            let span = atom.span.clone();
            return Ok(Group { terms: vec![(Sign::Positive, atom)], span });
        }

        let open = self.next_token()?;
        match self.peek().map(|token| (token.kind, token.span.end)) {
            Some((TokenKind::CloseParen, end)) => {
                return Err(self.error_at(open.span.start..end, error::EmptyParenthesis));
            },
            None => return Err(self.error_at(open.span, error::UnclosedParenthesis)),
            _ => (),
        }

        let mut group = self.parse_group()?;
        match self.peek_kind() {
            Some(TokenKind::CloseParen) => {
                let close = self.next_token()?;
                group.span = open.span.start..close.span.end;
                Ok(group)
            },
            _ => Err(self.error_at(open.span, error::UnclosedParenthesis)),
        }
    }

    /// Parses a chain: `factor ('*' factor)*`.
    pub fn parse_chain(&mut self) -> Result<Chain, Error> {
        let first = self.parse_factor()?;
        let start = first.span.start;
        let mut end = first.span.end;
        let mut factors = vec![first];

        while self.peek_kind() == Some(TokenKind::Mul) {
            self.cursor += 1;
            let factor = self.parse_factor()?;
            end = factor.span.end;
            factors.push(factor);
        }

        Ok(Chain { factors, span: start..end })
    }

    /// Parses a sum: `[sign] chain (sign chain)*`.
    pub fn parse_sum(&mut self) -> Result<Sum, Error> {
        let (sign, sign_span) = self.parse_leading_sign();
        let first = self.parse_chain()?;
        let start = sign_span.map_or(first.span.start, |span| span.start);
        let mut end = first.span.end;
        let mut chains = vec![(sign, first)];

        while let Some(kind) = self.peek_kind().filter(|kind| kind.is_sign()) {
            self.cursor += 1;
            let chain = self.parse_chain()?;
            end = chain.span.end;
            chains.push((sign_of(kind), chain));
        }

        Ok(Sum { chains, span: start..end })
    }
}

/// Returns the sign written by a `+` or `-` token.
fn sign_of(kind: TokenKind) -> Sign {
    if kind == TokenKind::Sub {
        Sign::Negative
    } else {
        Sign::Positive
    }
}

use ariadne::Fmt;
use lastik_attrs::ErrorKind;
use lastik_error::{ErrorKind, EXPR};
use crate::{tokenizer::TokenKind, vocab::LABELS};

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = ["I could not understand the remaining input here"],
    help = format!("products are joined with {} or {}", "+".fg(EXPR), "-".fg(EXPR)),
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "),
    )],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = "add a closing parenthesis `)` after the last term of the group",
)]
pub struct UnclosedParenthesis;

/// A category bracket was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed category bracket",
    labels = ["this bracket is not closed"],
    help = format!("write the category as {}", "label[category]".fg(EXPR)),
)]
pub struct UnclosedBracket;

/// There were no terms inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing terms inside parenthesis",
    labels = ["add a term here"],
)]
pub struct EmptyParenthesis;

/// A label outside the vocabulary was used without an explicit category.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a known label", self.label),
    labels = ["this label has no category"],
    help = format!("use one of the labels {}", LABELS.join(" ").fg(EXPR)),
)]
pub struct UnknownLabel {
    /// The label that was used.
    pub label: String,
}

/// An operand of a product was written with an explicit category.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be given a category here", self.label),
    labels = ["operands take the category of their label"],
    help = format!("write the operand as one of the labels {}", LABELS.join(" ").fg(EXPR)),
)]
pub struct ExplicitCategory {
    /// The label that was given a category.
    pub label: String,
}

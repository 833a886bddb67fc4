//! Contains the common [`ErrorKind`] trait used by errors that point into a piece of term
//! notation, along with the span-carrying [`Error`] type that wraps them.
//!
//! Reports are built and printed with [`ariadne`].

extern crate self as lastik_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading term notation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`](Any), so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'_, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error if it is of type `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the kind of this error is of type `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'_, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Print the report of this error to stderr, using `input` as the source it points into.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Render the report of this error into a string.
    ///
    /// The string contains ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use lastik_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is not a term", self.name),
        labels = ["this token"],
        help = "terms look like `a` or `-e`",
    )]
    struct NotATerm {
        name: String,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing here")]
    struct Nothing;

    fn plain(s: String) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn report_mentions_message_and_help() {
        let input = "a + 7";
        let err = Error::new(vec![4..5], NotATerm { name: "7".to_string() });
        let report = plain(err.report_to_string("input", input).unwrap());

        assert!(report.contains("`7` is not a term"));
        assert!(report.contains("this token"));
        assert!(report.contains("terms look like"));
    }

    #[test]
    fn downcast_to_kind() {
        let err = Error::new(vec![0..1], NotATerm { name: "?".to_string() });
        assert!(err.is::<NotATerm>());
        assert!(!err.is::<Nothing>());
        assert_eq!(err.downcast_ref::<NotATerm>().unwrap().name, "?");
    }

    #[test]
    fn unlabeled_kind_still_reports() {
        let err = Error::new(vec![0..2], Nothing);
        let report = plain(err.report_to_string("input", "ab").unwrap());
        assert!(report.contains("nothing here"));
    }
}

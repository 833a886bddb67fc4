use lastik_graph::explorer::ParseCurveError;
use lastik_scene::{InvalidScene, PresentError};
use std::fmt;

/// Utility enum to package errors that can occur while evaluating / rendering.
#[derive(Debug)]
pub enum Error {
    /// Errors that occurred while parsing term notation.
    ParseError(Vec<lastik_error::Error>),

    /// A scene failed validation.
    InvalidScene(InvalidScene),

    /// No scene has the given name.
    UnknownScene(String),

    /// The parameters of a curve could not be parsed.
    CurveError(ParseCurveError),

    /// An error that occurred while drawing or writing an image.
    RenderError(lastik_graph::Error),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    ///
    /// Parse errors are reported with `ariadne` against the given input. Every other error is a
    /// single line.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::ParseError(errs) => errs.iter().for_each(|err| {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("error: could not report parse error: {}", io_err);
                }
            }),
            err => eprintln!("error: {}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(errs) => write!(f, "{} parse error(s)", errs.len()),
            Self::InvalidScene(err) => write!(f, "invalid scene: {}", err),
            Self::UnknownScene(name) => write!(f, "unknown scene `{}`, expected one of P, Q, R, S", name),
            Self::CurveError(err) => err.fmt(f),
            Self::RenderError(err) => err.fmt(f),
        }
    }
}

impl From<Vec<lastik_error::Error>> for Error {
    fn from(errs: Vec<lastik_error::Error>) -> Self {
        Self::ParseError(errs)
    }
}

impl From<InvalidScene> for Error {
    fn from(err: InvalidScene) -> Self {
        Self::InvalidScene(err)
    }
}

impl From<ParseCurveError> for Error {
    fn from(err: ParseCurveError) -> Self {
        Self::CurveError(err)
    }
}

impl From<lastik_graph::Error> for Error {
    fn from(err: lastik_graph::Error) -> Self {
        Self::RenderError(err)
    }
}

impl From<PresentError<lastik_graph::Error>> for Error {
    fn from(err: PresentError<lastik_graph::Error>) -> Self {
        match err {
            PresentError::Invalid(err) => Self::InvalidScene(err),
            PresentError::Render(err) => Self::RenderError(err),
        }
    }
}

use std::{fmt, io, path::PathBuf};

/// Errors that can occur while rendering an image or writing it to disk.
#[derive(Debug)]
pub enum Error {
    /// Cairo failed to create or draw on a surface.
    Cairo(cairo::Error),

    /// The output file could not be created or written.
    Io {
        /// The file being written.
        path: PathBuf,

        /// The underlying error.
        source: io::Error,
    },
}

impl Error {
    /// Attaches the path of the file being written to an error from [`cairo::IoError`].
    pub(crate) fn writing(path: impl Into<PathBuf>, err: cairo::IoError) -> Error {
        match err {
            cairo::IoError::Cairo(err) => Error::Cairo(err),
            cairo::IoError::Io(source) => Error::Io { path: path.into(), source },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cairo(err) => write!(f, "rendering failed: {}", err),
            Error::Io { path, source } => write!(f, "could not write `{}`: {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Cairo(err) => Some(err),
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl From<cairo::Error> for Error {
    fn from(err: cairo::Error) -> Self {
        Self::Cairo(err)
    }
}

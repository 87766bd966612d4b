use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A contract violation in a puzzle string, detected before any matrix is
/// built. The solver itself never validates; a malformed grid must be
/// rejected here.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle must be exactly {expected} characters, got {found}")]
    BadLength { expected: usize, found: usize },
    #[error("invalid character {found:?} at position {position}; expected '1'..'9' or '.'")]
    BadCharacter { position: usize, found: char },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

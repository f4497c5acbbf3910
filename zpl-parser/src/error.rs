use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidOrientation,
    InvalidColor,
    InvalidCode128Mode,
}

/// A command parameter that is present but not one of the accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        let message = match kind {
            ParseErrorKind::InvalidOrientation => {
                "Invalid orientation value. Must be N, R, I, or B"
            }
            ParseErrorKind::InvalidColor => "Color must be B or W",
            ParseErrorKind::InvalidCode128Mode => "Invalid Code 128 mode. Must be N, U, A, or D",
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

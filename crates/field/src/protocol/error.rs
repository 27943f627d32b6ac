use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// The single failure kind of the field automaton.
///
/// `offset` is the cursor position at which no valid transition existed. For a
/// line that ends before its terminating CRLF, this is the length of the line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("malformed header field at offset {offset}")]
pub struct MalformedField {
    offset: usize,
}

impl MalformedField {
    pub fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Errors raised when turning a parsed field into `http` crate types.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{source}")]
    MalformedField {
        #[from]
        source: MalformedField,
    },

    #[error("invalid header name: {source}")]
    InvalidName {
        #[from]
        source: InvalidHeaderName,
    },

    #[error("invalid header value: {source}")]
    InvalidValue {
        #[from]
        source: InvalidHeaderValue,
    },
}

impl ParseError {
    /// Offset of the automaton failure, if this error came from the parser.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MalformedField { source } => Some(source.offset()),
            Self::InvalidName { .. } | Self::InvalidValue { .. } => None,
        }
    }
}

use thiserror::Error;

use crate::codec::{FormatError, RangeError};

#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("range error: {0}")]
    Range(#[from] RangeError),
}

impl SpliceError {
    /// The decode failure behind this error, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            SpliceError::Format(err) => Some(err),
            _ => None,
        }
    }
}

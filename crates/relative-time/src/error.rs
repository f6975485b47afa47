//! Error types for relative-time computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelativeTimeError {
    #[error("Invalid date format: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid timezone: '{0}'")]
    InvalidTimezone(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl RelativeTimeError {
    /// True when the input string matched none of the accepted date formats.
    pub fn is_format(&self) -> bool {
        matches!(self, RelativeTimeError::InvalidFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, RelativeTimeError>;

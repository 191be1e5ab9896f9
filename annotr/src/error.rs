//! Error handling for the annotation session engine

use compact_str::CompactString;
use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors produced by the tabular codec. Everything else in the session API
/// is total: out-of-range requests clamp and empty-state requests no-op.
#[derive(Error, Debug, Clone)]
pub enum SessionError {
    #[error("malformed tabular input: {0}")]
    Decode(CompactString),

    #[error("failed to encode tabular output: {0}")]
    Encode(CompactString),
}

impl SessionError {
    /// Create a decode error from the underlying csv error.
    #[inline]
    pub fn decode(err: &csv::Error) -> Self {
        Self::Decode(CompactString::from(err.to_string()))
    }

    /// Create an encode error with a message.
    #[inline]
    pub fn encode(message: impl Into<CompactString>) -> Self {
        Self::Encode(message.into())
    }
}

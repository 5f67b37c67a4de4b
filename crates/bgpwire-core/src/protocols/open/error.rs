use thiserror::Error;

use crate::wire::WireError;

use super::layout;

/// Errors returned by OPEN message decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("open message too short: need {} bytes, got {actual}", layout::MIN_OPEN_LEN)]
    MessageTooShort { actual: usize },
    #[error("unexpected {field}: expected {expected}, got {actual}")]
    UnexpectedFieldValue {
        field: &'static str,
        expected: u8,
        actual: u8,
    },
    #[error("optional parameter length {declared} exceeds remaining {remaining} bytes")]
    OptParamOverrun { declared: usize, remaining: usize },
    #[error("malformed capability parameter: {reason}")]
    MalformedCapability { reason: String },
    #[error("no capabilities parameter present")]
    MissingCapabilities,
    #[error(transparent)]
    Wire(#[from] WireError),
}

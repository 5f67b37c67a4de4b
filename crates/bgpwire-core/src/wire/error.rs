use thiserror::Error;

/// Errors produced by the shared wire machinery (cursor and TLV scan).
///
/// Protocol decoders embed this type via `#[from]` and add their own
/// message-level variants on top.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("buffer truncated: need {needed} bytes, got {remaining}")]
    TruncatedBuffer { needed: usize, remaining: usize },
    #[error("TLV type {tlv_type} declares {declared} value bytes, only {remaining} remain in region")]
    MalformedTlv {
        tlv_type: u8,
        declared: usize,
        remaining: usize,
    },
}

//! Maximum SID Depth decoding.
//!
//! MSD buffers carry fixed 2-byte {type, value} pairs, no TLV framing.
//! An odd-length buffer is rejected rather than read past the end.

pub mod error;
pub mod parser;

pub use error::MsdError;
pub use parser::{MsdPair, decode_msd_list, decode_msd_list_traced};

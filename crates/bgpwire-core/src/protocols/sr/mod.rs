//! Segment Routing Local Block decoding.
//!
//! A local block describes a locally significant label range: one flags
//! byte, one reserved byte, then a nested sub-TLV region scanned with
//! the shared TLV machinery.

pub mod error;
pub mod parser;

pub use error::LocalBlockError;
pub use parser::{LocalBlock, SubTlv, decode_local_block, decode_local_block_traced};

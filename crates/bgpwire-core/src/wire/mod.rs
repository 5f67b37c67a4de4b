//! Shared wire machinery.
//!
//! - `cursor`: bounds-checked sequential reads over a borrowed buffer
//! - `tlv`: TLV record and the region scanner
//! - `error`: structural errors shared by all protocol decoders
//!
//! Everything here is pure and allocation-light; protocol decoders layer
//! message semantics on top and never index into buffers directly.

pub mod cursor;
pub mod error;
pub mod tlv;

pub use cursor::Cursor;
pub use error::WireError;
pub use tlv::{Tlv, scan_tlvs};

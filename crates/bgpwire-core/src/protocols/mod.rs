//! Protocol message decoders.
//!
//! Each message kind follows a layered structure:
//! - `layout`: wire constants and widths (source of truth)
//! - `parser`: domain-level decoding over the shared cursor and TLV scan
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; a caller-supplied
//! [`WireTracer`](crate::trace::WireTracer) is the only observation
//! point besides the return value.

pub mod msd;
pub mod open;
pub mod sr;

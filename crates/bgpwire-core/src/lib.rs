//! Core decoders for BGP monitoring-stream wire messages.
//!
//! This crate turns opaque byte buffers into typed message objects:
//! the shared `wire` machinery (bounds-checked cursor, TLV scanner)
//! feeds per-message decoders for the BGP OPEN message, the SR Local
//! Block attribute, and MSD type/value lists. Data flows one way:
//! buffer -> cursor -> TLV scan -> type dispatch -> typed message.
//!
//! Invariants:
//! - No decode ever reads past the supplied buffer; truncation and
//!   lying length fields fail with explicit errors.
//! - Decoding is synchronous and side-effect free; the only
//!   observation points are the return value and an optional
//!   caller-injected [`WireTracer`].
//! - A caller receives either a fully populated message or an error,
//!   never a partial object presented as complete.
//!
//! Framing (delivering exactly-one-message buffers) and rendering of
//! decoded objects belong to callers; see the `bgpwire` CLI crate.
//!
//! # Examples
//! ```
//! use bgpwire_core::decode_msd_list;
//!
//! let pairs = decode_msd_list(&[0x01, 0x0a])?;
//! assert_eq!(pairs[0].msd_value, 10);
//! # Ok::<(), bgpwire_core::MsdError>(())
//! ```

pub mod protocols;
pub mod trace;
pub mod wire;

pub use protocols::msd::{MsdError, MsdPair, decode_msd_list, decode_msd_list_traced};
pub use protocols::open::{
    CapabilityError, CapabilitySet, OpenError, OpenMessage, OptParam, OptParamValue, decode_open,
    decode_open_traced,
};
pub use protocols::sr::{
    LocalBlock, LocalBlockError, SubTlv, decode_local_block, decode_local_block_traced,
};
pub use trace::{NoopTracer, WireTracer};
pub use wire::{Cursor, Tlv, WireError, scan_tlvs};

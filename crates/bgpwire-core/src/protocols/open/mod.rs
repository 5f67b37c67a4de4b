//! BGP OPEN message decoding.
//!
//! The parser gates on the RFC 4271 minimum length, reads the fixed
//! header in wire order, validates the type and version constants, then
//! hands the declared optional-parameter region to the TLV scanner.
//! Each scanned parameter is dispatched by type code in `capability`;
//! unknown codes are kept opaque rather than rejected.
//!
//! Structural errors in the outer scan are fatal; a malformed nested
//! capability region is scoped to its one parameter. Wire constants
//! live in `layout`, errors in `error`.

pub mod capability;
pub mod error;
pub mod layout;
pub mod parser;

pub use capability::{CapabilityError, CapabilitySet, OptParam, OptParamValue};
pub use error::OpenError;
pub use parser::{OpenMessage, decode_open, decode_open_traced};

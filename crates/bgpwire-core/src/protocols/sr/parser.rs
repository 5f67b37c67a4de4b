use serde::{Deserialize, Serialize};

use crate::trace::{NoopTracer, WireTracer};
use crate::wire::{Cursor, scan_tlvs};

use super::error::LocalBlockError;

/// One sub-TLV of an SR Local Block, with value bytes copied out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTlv {
    pub tlv_type: u8,
    pub value: Vec<u8>,
}

/// Decoded SR Local Block attribute.
///
/// The reserved byte between the flags and the sub-TLV region is
/// skipped on decode and not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBlock {
    pub flags: u8,
    pub sub_tlvs: Vec<SubTlv>,
}

/// Decode one SR Local Block buffer.
pub fn decode_local_block(buf: &[u8]) -> Result<LocalBlock, LocalBlockError> {
    decode_local_block_traced(buf, &mut NoopTracer)
}

/// Decode one SR Local Block buffer, reporting raw regions to `tracer`.
pub fn decode_local_block_traced(
    buf: &[u8],
    tracer: &mut dyn WireTracer,
) -> Result<LocalBlock, LocalBlockError> {
    tracer.on_region("local-block.message", buf);
    let mut cursor = Cursor::new(buf);
    let flags = cursor.read_u8()?;
    cursor.skip(1)?; // reserved
    let rest = cursor.remaining();
    let region = cursor.read_bytes(rest)?;
    let sub_tlvs = scan_tlvs(region)?
        .into_iter()
        .map(|tlv| SubTlv {
            tlv_type: tlv.tlv_type,
            value: tlv.value.to_vec(),
        })
        .collect();
    Ok(LocalBlock { flags, sub_tlvs })
}

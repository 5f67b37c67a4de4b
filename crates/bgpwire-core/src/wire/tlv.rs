use super::cursor::Cursor;
use super::error::WireError;

/// One decoded Type-Length-Value record.
///
/// `value` borrows from the scanned region; `value.len()` always equals
/// the wire `length` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tlv_type: u8,
    pub length: u8,
    pub value: &'a [u8],
}

/// Scan a bounded TLV region left to right until it is exhausted.
///
/// Records are emitted in wire order and duplicates of the same type are
/// preserved; de-duplication is a caller policy. A length field that
/// would read past the region fails with [`WireError::MalformedTlv`],
/// a region ending mid-header with [`WireError::TruncatedBuffer`].
///
/// The scan consumes exactly `region.len()` bytes on success.
pub fn scan_tlvs(region: &[u8]) -> Result<Vec<Tlv<'_>>, WireError> {
    let mut cursor = Cursor::new(region);
    let mut tlvs = Vec::new();
    while cursor.remaining() > 0 {
        let tlv_type = cursor.read_u8()?;
        let length = cursor.read_u8()?;
        let declared = length as usize;
        if declared > cursor.remaining() {
            return Err(WireError::MalformedTlv {
                tlv_type,
                declared,
                remaining: cursor.remaining(),
            });
        }
        let value = cursor.read_bytes(declared)?;
        tlvs.push(Tlv {
            tlv_type,
            length,
            value,
        });
    }
    Ok(tlvs)
}

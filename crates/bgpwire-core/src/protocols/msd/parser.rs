use serde::{Deserialize, Serialize};

use crate::trace::{NoopTracer, WireTracer};
use crate::wire::Cursor;

use super::error::MsdError;

/// One Maximum SID Depth type/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsdPair {
    pub msd_type: u8,
    pub msd_value: u8,
}

/// Decode an MSD buffer as fixed 2-byte {type, value} strides.
pub fn decode_msd_list(buf: &[u8]) -> Result<Vec<MsdPair>, MsdError> {
    decode_msd_list_traced(buf, &mut NoopTracer)
}

/// Decode an MSD buffer, reporting the raw region to `tracer`.
///
/// An odd-length buffer is rejected up front: a dangling trailing byte
/// cannot be half a pair, and decoding it would misreport the list.
pub fn decode_msd_list_traced(
    buf: &[u8],
    tracer: &mut dyn WireTracer,
) -> Result<Vec<MsdPair>, MsdError> {
    tracer.on_region("msd.message", buf);
    if buf.len() % 2 != 0 {
        return Err(MsdError::OddLength { length: buf.len() });
    }
    let mut cursor = Cursor::new(buf);
    let mut pairs = Vec::with_capacity(buf.len() / 2);
    while cursor.remaining() > 0 {
        let msd_type = cursor.read_u8()?;
        let msd_value = cursor.read_u8()?;
        pairs.push(MsdPair { msd_type, msd_value });
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::{MsdError, MsdPair, decode_msd_list};

    #[test]
    fn decodes_all_pairs_in_order() {
        let buf = [0x01, 0x0a, 0x02, 0x08];
        let pairs = decode_msd_list(&buf).unwrap();
        assert_eq!(
            pairs,
            vec![
                MsdPair {
                    msd_type: 1,
                    msd_value: 10
                },
                MsdPair {
                    msd_type: 2,
                    msd_value: 8
                },
            ]
        );
    }

    #[test]
    fn empty_buffer_is_an_empty_list() {
        assert!(decode_msd_list(&[]).unwrap().is_empty());
    }

    #[test]
    fn odd_length_is_rejected() {
        let err = decode_msd_list(&[0x01, 0x0a, 0x02]).unwrap_err();
        assert_eq!(err, MsdError::OddLength { length: 3 });
    }
}

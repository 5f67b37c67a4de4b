use serde::{Deserialize, Serialize};

use crate::trace::{NoopTracer, WireTracer};
use crate::wire::{Cursor, scan_tlvs};

use super::capability::{self, CapabilitySet, OptParam, OptParamValue};
use super::error::OpenError;
use super::layout;

/// Decoded BGP OPEN message: fixed header fields plus the dispatched
/// optional parameters from the trailing TLV region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenMessage {
    pub length: u16,
    pub msg_type: u8,
    pub version: u8,
    pub my_as: u16,
    pub hold_time: u16,
    pub bgp_id: [u8; 4],
    pub opt_param_len: u8,
    pub opt_params: Vec<OptParam>,
}

impl OpenMessage {
    /// The capability set of the first capabilities parameter.
    ///
    /// First type-2 parameter wins when several are present. A type-2
    /// parameter whose nested region failed to decode surfaces here as
    /// [`OpenError::MalformedCapability`].
    pub fn capabilities(&self) -> Result<&CapabilitySet, OpenError> {
        for param in &self.opt_params {
            if param.param_type != layout::PARAM_CAPABILITIES {
                continue;
            }
            return match &param.value {
                OptParamValue::Capabilities(caps) => Ok(caps),
                OptParamValue::InvalidCapabilities { reason, .. } => {
                    Err(OpenError::MalformedCapability {
                        reason: reason.clone(),
                    })
                }
                _ => Err(OpenError::MissingCapabilities),
            };
        }
        Err(OpenError::MissingCapabilities)
    }

    /// The peer's advertised 4-byte AS number, if it advertised the
    /// capability. `None` is a definitive "not supported"; a missing or
    /// malformed capabilities parameter also reads as not supported.
    pub fn four_byte_as(&self) -> Option<u32> {
        self.capabilities().ok()?.four_byte_as()
    }

    /// Whether the peer advertised the Multiple Label marker parameter.
    pub fn is_multi_label_capable(&self) -> bool {
        self.opt_params
            .iter()
            .any(|param| matches!(param.value, OptParamValue::MultiLabel))
    }
}

/// Decode one OPEN message buffer.
pub fn decode_open(buf: &[u8]) -> Result<OpenMessage, OpenError> {
    decode_open_traced(buf, &mut NoopTracer)
}

/// Decode one OPEN message buffer, reporting raw regions to `tracer`.
///
/// The minimum-length gate runs before any field is read. Constant
/// fields (type, version) are validated in wire order; failures there
/// are fatal to the whole decode. The declared optional-parameter
/// length bounds the TLV region handed to the scanner.
pub fn decode_open_traced(
    buf: &[u8],
    tracer: &mut dyn WireTracer,
) -> Result<OpenMessage, OpenError> {
    tracer.on_region("open.message", buf);
    if buf.len() < layout::MIN_OPEN_LEN {
        return Err(OpenError::MessageTooShort { actual: buf.len() });
    }

    let mut cursor = Cursor::new(buf);
    let length = cursor.read_u16_be()?;
    let msg_type = cursor.read_u8()?;
    if msg_type != layout::MSG_TYPE_OPEN {
        return Err(OpenError::UnexpectedFieldValue {
            field: "type",
            expected: layout::MSG_TYPE_OPEN,
            actual: msg_type,
        });
    }
    let version = cursor.read_u8()?;
    if version != layout::BGP_VERSION {
        return Err(OpenError::UnexpectedFieldValue {
            field: "version",
            expected: layout::BGP_VERSION,
            actual: version,
        });
    }
    let my_as = cursor.read_u16_be()?;
    let hold_time = cursor.read_u16_be()?;
    let mut bgp_id = [0u8; layout::BGP_ID_LEN];
    bgp_id.copy_from_slice(cursor.read_bytes(layout::BGP_ID_LEN)?);
    let opt_param_len = cursor.read_u8()?;

    let declared = opt_param_len as usize;
    if declared > cursor.remaining() {
        return Err(OpenError::OptParamOverrun {
            declared,
            remaining: cursor.remaining(),
        });
    }
    let region = cursor.read_bytes(declared)?;

    let mut opt_params = Vec::new();
    if !region.is_empty() {
        tracer.on_region("open.opt-params", region);
        for tlv in scan_tlvs(region)? {
            opt_params.push(capability::dispatch(&tlv));
        }
    }

    Ok(OpenMessage {
        length,
        msg_type,
        version,
        my_as,
        hold_time,
        bgp_id,
        opt_param_len,
        opt_params,
    })
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wire::{Tlv, WireError, scan_tlvs};

use super::layout;

/// Errors confined to one capabilities parameter's nested TLV region.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("capability {code} has {actual} value bytes, expected {expected}")]
    InvalidWidth {
        code: u8,
        expected: usize,
        actual: usize,
    },
}

/// Capabilities advertised in one type-2 optional parameter.
///
/// Codes map to their raw value bytes. The wire region may repeat a
/// code; the first occurrence wins and later ones are dropped, which is
/// the one de-duplication policy applied above the raw TLV scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    caps: Vec<(u8, Vec<u8>)>,
}

impl CapabilitySet {
    /// Decode the nested TLV region of a capabilities parameter.
    pub fn from_region(region: &[u8]) -> Result<Self, CapabilityError> {
        let tlvs = scan_tlvs(region)?;
        let mut caps: Vec<(u8, Vec<u8>)> = Vec::with_capacity(tlvs.len());
        for tlv in tlvs {
            if tlv.tlv_type == layout::CAP_FOUR_BYTE_AS
                && tlv.value.len() != layout::CAP_FOUR_BYTE_AS_LEN
            {
                return Err(CapabilityError::InvalidWidth {
                    code: tlv.tlv_type,
                    expected: layout::CAP_FOUR_BYTE_AS_LEN,
                    actual: tlv.value.len(),
                });
            }
            if caps.iter().any(|(code, _)| *code == tlv.tlv_type) {
                continue;
            }
            caps.push((tlv.tlv_type, tlv.value.to_vec()));
        }
        Ok(Self { caps })
    }

    pub fn get(&self, code: u8) -> Option<&[u8]> {
        self.caps
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, value)| value.as_slice())
    }

    pub fn contains(&self, code: u8) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.caps.iter().map(|(code, value)| (*code, value.as_slice()))
    }

    /// The advertised 4-byte AS number, or `None` when the peer did not
    /// advertise the capability. Absence is a definitive "not
    /// supported", not an error; a present code 65 with the wrong width
    /// was already rejected in [`CapabilitySet::from_region`].
    pub fn four_byte_as(&self) -> Option<u32> {
        let value = self.get(layout::CAP_FOUR_BYTE_AS)?;
        let bytes: [u8; 4] = value.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }
}

/// One decoded optional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptParam {
    pub param_type: u8,
    pub value: OptParamValue,
}

/// Semantic value of an optional parameter, dispatched by type code.
///
/// The set of known codes is closed; anything else lands in `Opaque`
/// with its raw bytes so callers can still reason about presence and
/// size. A capabilities parameter whose nested region is structurally
/// invalid becomes `InvalidCapabilities`: the defect stays scoped to
/// that one parameter and siblings keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptParamValue {
    Capabilities(CapabilitySet),
    MultiLabel,
    Opaque { raw: Vec<u8> },
    InvalidCapabilities { reason: String, raw: Vec<u8> },
}

/// Dispatch one scanned TLV record to its semantic decoder.
pub(super) fn dispatch(tlv: &Tlv<'_>) -> OptParam {
    let value = match tlv.tlv_type {
        layout::PARAM_CAPABILITIES => match CapabilitySet::from_region(tlv.value) {
            Ok(caps) => OptParamValue::Capabilities(caps),
            Err(err) => OptParamValue::InvalidCapabilities {
                reason: err.to_string(),
                raw: tlv.value.to_vec(),
            },
        },
        // Presence-only marker; any value bytes are ignored.
        layout::PARAM_MULTI_LABEL => OptParamValue::MultiLabel,
        _ => OptParamValue::Opaque {
            raw: tlv.value.to_vec(),
        },
    };
    OptParam {
        param_type: tlv.tlv_type,
        value,
    }
}

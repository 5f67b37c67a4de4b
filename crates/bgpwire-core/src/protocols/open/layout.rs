/// Minimum total length of a BGP OPEN message, per RFC 4271.
pub const MIN_OPEN_LEN: usize = 29;

/// Message-type byte required for an OPEN message.
pub const MSG_TYPE_OPEN: u8 = 1;
/// Protocol version byte required for an OPEN message.
pub const BGP_VERSION: u8 = 4;

/// Width of the BGP identifier field.
pub const BGP_ID_LEN: usize = 4;

/// Optional parameter carrying a nested capability TLV region (RFC 5492).
pub const PARAM_CAPABILITIES: u8 = 2;
/// Optional parameter marking Multiple Label support; presence-only.
pub const PARAM_MULTI_LABEL: u8 = 8;

/// Capability code advertising 4-byte AS number support (RFC 6793).
pub const CAP_FOUR_BYTE_AS: u8 = 65;
/// Required value width of the 4-byte AS capability.
pub const CAP_FOUR_BYTE_AS_LEN: usize = 4;

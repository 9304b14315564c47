//! header/types.rs
//! Parsed view of the fixed container prefix.

use crate::constants::SIGNATURE;

/// Byte length of the fixed prefix.
pub const FIXED_PREFIX_LEN: usize = SIGNATURE.len() // signature
    + 4                                             // version_num
    + 4                                             // version_header_len
    + 4;                                            // end_padding_size

/// The fixed 20-byte prefix, decoded.
///
/// All integer fields are big-endian u32 on the wire. The signature is not
/// kept here: parsing fails unless it matches, so a decoded prefix implies
/// a valid signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPrefix {
    /// Format version; selects the decoder via the registry.
    pub version_num: u32,
    /// Length of the version-specific sub-header that follows the prefix.
    pub version_header_len: u32,
    /// Number of trailing filler bytes.
    pub end_padding_size: u32,
}

impl HeaderPrefix {
    /// Offset of the payload: fixed prefix plus the version sub-header.
    /// Derived, never stored on the wire.
    pub fn data_offset(&self) -> usize {
        FIXED_PREFIX_LEN + self.version_header_len as usize
    }
}

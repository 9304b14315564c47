//! header/encode.rs
//! Serializes the container header (fixed prefix + version sub-header).

use crate::constants::SIGNATURE;
use crate::header::types::FIXED_PREFIX_LEN;

/// Pack the full header: signature, version, sub-header length, padding
/// size (big-endian u32s), then the version sub-header bytes. Pure; no
/// validation beyond what the types enforce.
pub fn build_header(
    version_num: u32,
    version_header: &[u8],
    end_padding_size: u32,
) -> Vec<u8> {
    let expected = FIXED_PREFIX_LEN + version_header.len();
    let mut out = Vec::with_capacity(expected);

    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&version_num.to_be_bytes());
    out.extend_from_slice(&(version_header.len() as u32).to_be_bytes());
    out.extend_from_slice(&end_padding_size.to_be_bytes());
    out.extend_from_slice(version_header);

    debug_assert_eq!(out.len(), expected);
    out
}

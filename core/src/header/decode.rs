//! header/decode.rs
//! Parses the fixed container prefix.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::SIGNATURE;
use crate::error::ContainerError;
use crate::header::types::{HeaderPrefix, FIXED_PREFIX_LEN};

/// Read exactly the fixed 20-byte prefix.
///
/// Checks truncation first, then the signature; never touches the version
/// sub-header or payload, so it works for any registered or unregistered
/// version.
pub fn parse_prefix(buf: &[u8]) -> Result<HeaderPrefix, ContainerError> {
    if buf.len() < FIXED_PREFIX_LEN {
        return Err(ContainerError::TruncatedBuffer {
            have: buf.len(),
            need: FIXED_PREFIX_LEN,
        });
    }

    let mut off = 0;

    let signature = &buf[off..off + SIGNATURE.len()];
    off += SIGNATURE.len();
    if signature != SIGNATURE {
        let mut have = [0u8; 8];
        have.copy_from_slice(signature);
        return Err(ContainerError::SignatureMismatch { have });
    }

    let version_num = BigEndian::read_u32(&buf[off..off + 4]);
    off += 4;

    let version_header_len = BigEndian::read_u32(&buf[off..off + 4]);
    off += 4;

    let end_padding_size = BigEndian::read_u32(&buf[off..off + 4]);

    Ok(HeaderPrefix {
        version_num,
        version_header_len,
        end_padding_size,
    })
}

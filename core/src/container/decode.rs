//! container/decode.rs
//! Byte buffer -> header metadata + original payload.

use crate::container::{ContainerHeader, Decoded};
use crate::error::ContainerError;
use crate::header::{parse_prefix, FIXED_PREFIX_LEN};
use crate::version::{registry, VersionDriver};

/// Self-describing decode: read the fixed prefix, resolve the declared
/// version in the registry, delegate to that version's driver.
pub fn decode_container(buf: &[u8]) -> Result<Decoded, ContainerError> {
    let prefix = parse_prefix(buf)?;
    let driver = registry::resolve(prefix.version_num)?;
    decode_container_with(&*driver, buf)
}

/// Decode with an explicit version driver.
///
/// Slices the version sub-header and the payload using the lengths the
/// prefix declares, then runs the driver's integrity check on the payload,
/// unconditionally, on every decode.
pub fn decode_container_with(
    driver: &dyn VersionDriver,
    buf: &[u8],
) -> Result<Decoded, ContainerError> {
    let prefix = parse_prefix(buf)?;

    let data_offset = prefix.data_offset();
    let end_padding = prefix.end_padding_size as usize;

    // Declared regions must fit: prefix + sub-header + (payload >= 0) + padding.
    let need = data_offset + end_padding;
    if buf.len() < need {
        return Err(ContainerError::TruncatedBuffer {
            have: buf.len(),
            need,
        });
    }

    let version_header_bytes = &buf[FIXED_PREFIX_LEN..data_offset];
    let version_header = driver.decode_version_header(version_header_bytes)?;

    let payload = &buf[data_offset..buf.len() - end_padding];
    driver.verify(&version_header, payload)?;

    Ok(Decoded {
        header: ContainerHeader {
            prefix,
            version_header,
        },
        payload: payload.to_vec(),
    })
}

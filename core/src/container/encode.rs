//! container/encode.rs
//! Payload -> padded, checksummed, versioned byte buffer.

use crate::error::ContainerError;
use crate::header::build_header;
use crate::padding::PaddingPlan;
use crate::version::{V0Driver, VersionDriver};

/// Encode a payload with the built-in version 0 (SHA-512 sub-header).
pub fn encode_container(payload: &[u8]) -> Result<Vec<u8>, ContainerError> {
    encode_container_with(&V0Driver, payload)
}

/// Encode a payload with an explicit version driver.
///
/// Two-pass sizing: the padding field must be written into the header, but
/// the header's own length contributes to the padding. A placeholder
/// sub-header sizes the padding first; the invariant that placeholder and
/// final sub-headers have identical length makes the second pass exact.
pub fn encode_container_with(
    driver: &dyn VersionDriver,
    payload: &[u8],
) -> Result<Vec<u8>, ContainerError> {
    let preliminary = driver.build_version_header(None);
    let preliminary_header = build_header(driver.version_num(), &preliminary, 0);

    let plan = PaddingPlan::for_unpadded_len(preliminary_header.len() + payload.len())?;

    let version_header = driver.build_version_header(Some(payload));
    if version_header.len() != preliminary.len() {
        return Err(ContainerError::HeaderLengthInvariant {
            preliminary: preliminary.len(),
            fin: version_header.len(),
        });
    }

    let header = build_header(
        driver.version_num(),
        &version_header,
        plan.end_padding as u32,
    );

    let mut out = Vec::with_capacity(plan.total_len);
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);

    // The plan was sized from the preliminary header; the equal-length
    // invariant above is what guarantees the final header still fits.
    if out.len() != plan.unpadded_len {
        return Err(ContainerError::PaddingArithmetic {
            unpadded_len: out.len(),
            total_len: plan.total_len,
        });
    }
    out.resize(plan.total_len, 0); // filler; value never interpreted

    Ok(out)
}

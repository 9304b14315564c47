//! version/v0.rs
//! Built-in version 0: SHA-512 payload digest as the sub-header.

use crate::constants::VERSION_V0;
use crate::error::ContainerError;
use crate::integrity::{payload_digest, DIGEST_LEN};
use crate::version::{VersionDriver, VersionHeader};

/// Version-0 driver. Stateless; the sub-header is exactly the 64-byte
/// SHA-512 digest of the raw payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct V0Driver;

impl VersionDriver for V0Driver {
    fn version_num(&self) -> u32 {
        VERSION_V0
    }

    fn build_version_header(&self, payload: Option<&[u8]>) -> Vec<u8> {
        match payload {
            // Placeholder for padding sizing: only the length is observed.
            None => vec![0u8; DIGEST_LEN],
            Some(p) => payload_digest(p).to_vec(),
        }
    }

    fn decode_version_header(&self, bytes: &[u8]) -> Result<VersionHeader, ContainerError> {
        if bytes.len() != DIGEST_LEN {
            return Err(ContainerError::VersionHeaderLength {
                version: VERSION_V0,
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }

        let mut checksum = [0u8; DIGEST_LEN];
        checksum.copy_from_slice(bytes);
        Ok(VersionHeader::V0 { checksum })
    }

    fn verify(&self, header: &VersionHeader, payload: &[u8]) -> Result<(), ContainerError> {
        match header {
            VersionHeader::V0 { checksum } => {
                let computed = payload_digest(payload);
                if &computed != checksum {
                    return Err(ContainerError::ChecksumMismatch {
                        stored: checksum.to_vec(),
                        computed: computed.to_vec(),
                    });
                }
                Ok(())
            }
        }
    }
}

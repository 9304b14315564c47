//! integrity.rs
//! Payload digest for the version-0 sub-header.
//!
//! The digest is computed over the raw, unpadded payload and stored verbatim
//! as the version-specific header. The algorithm is a versioned choice: a
//! future version may switch, as long as its output length stays fixed.

use sha2::{Digest as _, Sha512};

/// SHA-512 output length; also the version-0 sub-header length.
pub const DIGEST_LEN: usize = 64;

/// Digest of the raw payload bytes.
pub fn payload_digest(payload: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha512::new();
    hasher.update(payload);
    hasher.finalize().into()
}

//! error.rs
//! Container error taxonomy.
//!
//! Every variant is fatal for the current encode/decode: nothing here is
//! retried or recovered locally, callers surface the failure as-is.

use thiserror::Error;

use crate::constants::SIGNATURE;

/// Render a byte string for diagnostics: printable ASCII as-is, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// All the ways an encode or decode can fail.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Buffer does not start with the 8-byte format signature.
    #[error("invalid signature: expected {}, got {}", fmt_bytes(&SIGNATURE), fmt_bytes(.have))]
    SignatureMismatch { have: [u8; 8] },

    /// Declared version has no registered decoder.
    #[error("unregistered container version: {version}")]
    UnregisteredVersion { version: u32 },

    /// A decoder for this version already exists; the registry is append-only.
    #[error("version {version} is already registered")]
    DuplicateVersion { version: u32 },

    /// Recomputed payload digest differs from the stored one.
    #[error("checksum mismatch: stored 0x{}, computed 0x{}", hex::encode(.stored), hex::encode(.computed))]
    ChecksumMismatch {
        stored: Vec<u8>,
        computed: Vec<u8>,
    },

    /// Preliminary and final version sub-headers differ in length.
    /// Indicates a broken version driver, not malformed input.
    #[error("version header length drifted between sizing passes: preliminary {preliminary}, final {fin}")]
    HeaderLengthInvariant { preliminary: usize, fin: usize },

    /// Padding/side-length arithmetic produced an impossible total.
    /// Indicates an implementation bug, not malformed input.
    #[error("padding arithmetic violation: unpadded {unpadded_len} does not fit total {total_len}")]
    PaddingArithmetic {
        unpadded_len: usize,
        total_len: usize,
    },

    /// Buffer shorter than the lengths its header declares (or than the
    /// fixed prefix itself).
    #[error("truncated buffer: have {have} bytes, need {need}")]
    TruncatedBuffer { have: usize, need: usize },

    /// Version sub-header slice has the wrong length for its version.
    #[error("version {version} sub-header length mismatch: expected {expected}, got {actual}")]
    VersionHeaderLength {
        version: u32,
        expected: usize,
        actual: usize,
    },
}

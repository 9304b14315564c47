//! container/mod.rs
//! Encode/decode orchestration for whole containers.
//!
//! A container is built once from a payload, never mutated, and consumed
//! once by decode. Both directions are pure transformations over in-memory
//! buffers; persisting the result (e.g. as a PNG) is the caller's concern.

pub mod decode;
pub mod encode;

pub use decode::*;
pub use encode::*;

use crate::header::HeaderPrefix;
use crate::version::VersionHeader;

/// Full decoded header: fixed prefix plus the parsed version sub-header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub prefix: HeaderPrefix,
    pub version_header: VersionHeader,
}

/// Result of decoding a container: header metadata and the original payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub header: ContainerHeader,
    pub payload: Vec<u8>,
}

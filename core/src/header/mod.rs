//! header/mod.rs
//! Fixed-prefix header codec for the container format.
//!
//! The prefix is 20 bytes: 8-byte signature, then three big-endian u32s
//! (version, version sub-header length, end padding size). Everything after
//! it is version-defined.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use types::*;

//! imgstore-core
//!
//! A versioned binary container that embeds an arbitrary payload, plus
//! integrity metadata, in a buffer whose length always reshapes into a
//! square 4-bytes-per-pixel grid, so it can be persisted as a lossless
//! raster image.
//!
//! Wire layout (all integers big-endian u32):
//!
//! ```text
//! [ signature (8, "IMGSTORE") ]
//! [ version_num (4) ]
//! [ version_header_len (4) ]
//! [ end_padding_size (4) ]
//! [ version-specific header (version_header_len) ]
//! [ payload ]
//! [ padding (end_padding_size) ]
//! ```
//!
//! Encode and decode are pure, synchronous, whole-buffer transformations.
//! The only shared state is the process-wide version registry, populated
//! once at startup and read-only afterwards.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod error;

// Leaves
pub mod integrity;
pub mod padding;

// Format layers
pub mod container;
pub mod header;
pub mod version;

pub use container::{decode_container, encode_container, ContainerHeader, Decoded};
pub use error::ContainerError;
pub use padding::{grid_side_for_len, PaddingPlan};

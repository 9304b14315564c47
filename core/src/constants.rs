/// Magic signature for the container format.
/// "IMGSTORE", kept as a `[u8; 8]` so the type itself enforces exactly 8 bytes and
/// matches the prefix field width.
pub const SIGNATURE: [u8; 8] = *b"IMGSTORE";

/// Built-in format version (SHA-512 payload digest as the sub-header).
pub const VERSION_V0: u32 = 0;

/// Bytes per pixel of the raster view (RGBA, 8 bits per channel).
pub const BYTES_PER_PIXEL: usize = 4;

//! Container buffer <-> square RGBA8 PNG translation.
//!
//! The container bytes are framed as a `side x side` grid of 4-byte RGBA
//! pixels and written losslessly. Reading must hand back the exact original
//! bytes: anything that would resample or convert pixels is rejected rather
//! than repaired, since a reshaped buffer no longer decodes.

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};

/// Write a container buffer as a `side x side` RGBA8 PNG.
///
/// `data.len()` must equal `4 * side * side`.
pub fn write_png(w: impl Write, data: &[u8], side: u32) -> Result<()> {
    let expected = 4 * side as usize * side as usize;
    if data.len() != expected {
        bail!(
            "pixel buffer length {} does not fill a {side}x{side} RGBA grid (need {expected})",
            data.len()
        );
    }

    let mut encoder = png::Encoder::new(w, side, side);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().context("failed to write PNG header")?;
    writer
        .write_image_data(data)
        .context("failed to write PNG pixel data")?;

    Ok(())
}

/// Read a PNG back into the exact container bytes it was written from.
///
/// Only square 8-bit RGBA images are accepted.
pub fn read_png(r: impl Read) -> Result<Vec<u8>> {
    let decoder = png::Decoder::new(r);
    let mut reader = decoder.read_info().context("failed to read PNG header")?;

    let (color, depth) = reader.output_color_type();
    if color != png::ColorType::Rgba || depth != png::BitDepth::Eight {
        bail!("not a container image: expected 8-bit RGBA pixels, got {color:?}/{depth:?}");
    }

    let info = reader.info();
    if info.width != info.height {
        bail!(
            "not a container image: {}x{} is not square",
            info.width,
            info.height
        );
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .context("failed to read PNG pixel data")?;
    buf.truncate(frame.buffer_size());

    Ok(buf)
}

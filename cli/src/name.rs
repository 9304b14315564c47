//! Output-name derivation when no explicit output path is given.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Encode: the image lands next to the input, with `.png` appended to the
/// full name (`notes.txt` -> `notes.txt.png`).
pub fn derive_encode_output(input: &Path) -> Result<PathBuf> {
    let s = input
        .to_str()
        .context("input path is not valid UTF-8; pass an explicit output path")?;
    Ok(PathBuf::from(format!("{s}.png")))
}

/// Decode: strip a required `.png` suffix (case-insensitive) from the input
/// name. Without the suffix there is nothing sensible to derive.
pub fn derive_decode_output(input: &Path) -> Result<PathBuf> {
    let s = input
        .to_str()
        .context("input path is not valid UTF-8; pass an explicit output path")?;
    if !s.to_lowercase().ends_with(".png") {
        bail!("cannot derive an output name: {s:?} does not end in .png");
    }
    Ok(PathBuf::from(&s[..s.len() - 4]))
}

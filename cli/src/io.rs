//! Stream opening: `-` selects standard input/output, anything else is a
//! filesystem path.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// True when the path is the `-` stdin/stdout sentinel.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read the whole input: stdin for `-`, a file otherwise.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdio(path) {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read standard input")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Open the output for writing: stdout for `-`, a buffered file otherwise.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

//! imgstore - store arbitrary payloads inside square lossless PNG images.
//!
//! ```bash
//! imgstore encode notes.txt            # writes notes.txt.png
//! imgstore encode notes.txt out.png
//! imgstore decode notes.txt.png        # writes notes.txt
//! imgstore encode - out.png < notes.txt
//! imgstore decode out.png - | less
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use imgstore_core::{decode_container, encode_container, grid_side_for_len};

mod io;
mod name;
mod raster;

#[derive(Parser)]
#[command(name = "imgstore")]
#[command(about = "Embed payloads in square lossless PNG containers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payload file into a PNG container
    Encode {
        /// Payload to embed (`-` for standard input)
        input: PathBuf,

        /// Output image (`-` for standard output; default: `<input>.png`)
        output: Option<PathBuf>,
    },

    /// Extract the payload from a PNG container
    Decode {
        /// Container image (`-` for standard input)
        input: PathBuf,

        /// Output file (`-` for standard output; default: input minus `.png`)
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout may be carrying the payload or image.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => encode(input, output),
        Commands::Decode { input, output } => decode(input, output),
    }
}

fn encode(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => {
            if io::is_stdio(&input) {
                bail!("an output path is required when reading from standard input");
            }
            name::derive_encode_output(&input)?
        }
    };

    let payload = io::read_input(&input)?;
    let container = encode_container(&payload)?;
    let side = grid_side_for_len(container.len())?;

    let writer = io::open_output(&output)?;
    raster::write_png(writer, &container, side as u32)?;

    info!(
        "encoded {} payload bytes into {} ({side}x{side} px)",
        payload.len(),
        output.display()
    );
    Ok(())
}

fn decode(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => {
            if io::is_stdio(&input) {
                bail!("an output path is required when reading from standard input");
            }
            name::derive_decode_output(&input)?
        }
    };

    let image = io::read_input(&input)?;
    let container = raster::read_png(&image[..])?;
    let decoded = decode_container(&container)?;

    let mut writer = io::open_output(&output)?;
    writer.write_all(&decoded.payload)?;
    writer.flush()?;

    info!(
        "decoded {} payload bytes from {} (container version {})",
        decoded.payload.len(),
        input.display(),
        decoded.header.prefix.version_num
    );
    Ok(())
}

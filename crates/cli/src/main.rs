mod args;
mod commands;
mod compress;
mod raster;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{DecodeArgs, EncodeArgs};
use commands::{decode, encode};

/// bin2code: embed binary files as C/C++ array literals
///
/// Converts arbitrary binary content (optionally an image, optionally
/// compressed) into a textual array representation that can be pasted into
/// source code, and recovers the original bytes from that same text.
#[derive(Parser, Debug)]
#[command(name = "bin2code")]
#[command(author, version, about = "Converts binary files to embeddable array literals and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a file into an array literal.
    ///
    /// The result is a C/C++ header snippet containing the file's bytes as
    /// an array, plus a size constant (C style) or an element-count
    /// annotation (std::array style).
    Encode(EncodeArgs),

    /// Recover the original bytes from an array literal.
    ///
    /// Reads a header file produced by `encode` (streaming, in fixed-size
    /// chunks) and writes back the embedded payload. Pass the same
    /// compression flag that was used when encoding.
    Decode(DecodeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => encode::encode_file(&args)?,
        Commands::Decode(args) => decode::decode_file(&args)?,
    }

    Ok(())
}

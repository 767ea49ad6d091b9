use anyhow::{Context, Result};
use bin2code_codec::{Decoded, Parser};
use std::fs::File;
use std::io::Read;

use crate::args::DecodeArgs;
use crate::commands::write_output;
use crate::compress;
use crate::raster;

/// Read granularity for the streaming parse. The parser itself accepts any
/// chunk size; this just bounds how much of the input file is resident at
/// once.
const CHUNK_SIZE: usize = 4096;

pub fn decode_file(args: &DecodeArgs) -> Result<()> {
    let Decoded {
        bytes,
        metadata,
        errors,
    } = parse_input(args)?;

    for error in &errors {
        eprintln!("Warning: {error}");
    }

    let bytes = match args.compress.as_deref() {
        Some(algorithm) => compress::decompress(&bytes, algorithm)?,
        None => bytes,
    };

    let output = match args.image_format.as_deref() {
        Some(format) => {
            let meta = metadata
                .ok_or_else(|| anyhow::anyhow!("Failed to parse image properties"))?;
            raster::encode_image(&bytes, meta, format)?
        }
        None => bytes,
    };

    write_output(args.output.as_deref(), &output)?;

    if let Some(path) = &args.output {
        println!("✓ Decoded {} bytes to {}", output.len(), path.display());
    }
    Ok(())
}

/// Streams the input file through the parser in fixed-size chunks, with a
/// capacity hint taken from the file size.
fn parse_input(args: &DecodeArgs) -> Result<Decoded> {
    let mut file = File::open(&args.input)
        .with_context(|| format!("Failed to open file '{}'", args.input.display()))?;
    let hint = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut parser = Parser::with_capacity(hint);
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read from file '{}'", args.input.display()))?;
        if read == 0 {
            break;
        }
        parser.parse_chunk(&buffer[..read]);
    }

    Ok(parser.finish())
}

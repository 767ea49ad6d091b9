use anyhow::{Context, Result};
use bin2code_codec::{encode, ContainerStyle, FormatSpec, ImageMetadata, NumeralStyle, Qualifier};
use std::fs;

use crate::args::EncodeArgs;
use crate::commands::write_output;
use crate::compress;
use crate::raster;

pub fn encode_file(args: &EncodeArgs) -> Result<()> {
    let spec = build_spec(args)?;

    let raw = fs::read(&args.input)
        .with_context(|| format!("Failed to open file '{}'", args.input.display()))?;

    let (payload, metadata) = if args.image {
        let decoded = raster::decode_image(&raw)
            .with_context(|| format!("Failed to decode image '{}'", args.input.display()))?;
        let meta = ImageMetadata::new(decoded.width, decoded.height, decoded.channels);
        (decoded.pixels, Some(meta))
    } else {
        (raw, None)
    };

    let payload = match args.compress.as_deref() {
        Some(algorithm) => compress::compress(&payload, algorithm, &args.level)?,
        None => payload,
    };

    let text = encode(&payload, &spec, metadata.as_ref());
    write_output(args.output.as_deref(), text.as_bytes())?;

    if let Some(path) = &args.output {
        println!("✓ Encoded {} bytes to {}", payload.len(), path.display());
    }
    Ok(())
}

fn build_spec(args: &EncodeArgs) -> Result<FormatSpec> {
    let style = match args.style.as_str() {
        "hex" => NumeralStyle::Hex,
        "decimal" => NumeralStyle::Decimal,
        "binary" => NumeralStyle::Binary,
        "char" => NumeralStyle::Char,
        other => anyhow::bail!("Unknown style '{other}'. Use: hex, decimal, binary, or char"),
    };
    let qualifier = match args.qualifier.as_str() {
        "const" => Qualifier::StaticConst,
        "constexpr" => Qualifier::Constexpr,
        "inline" => Qualifier::InlineConstexpr,
        other => anyhow::bail!("Unknown qualifier '{other}'. Use: const, constexpr, or inline"),
    };
    let container = if args.std_array {
        ContainerStyle::Sized
    } else {
        ContainerStyle::Fixed
    };

    Ok(FormatSpec {
        style,
        container,
        compact: args.compact,
        qualifier,
    })
}

//! Compression adapter: gzip and zlib via flate2. Any failure aborts the
//! enclosing conversion; no partial output is produced.

use anyhow::{Context, Result};
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use std::io::{Read, Write};

fn level(name: &str) -> Result<Compression> {
    match name {
        "default" => Ok(Compression::default()),
        "fast" => Ok(Compression::fast()),
        "best" => Ok(Compression::best()),
        other => anyhow::bail!("Unknown compression level '{other}'. Use: default, fast, or best"),
    }
}

pub fn compress(data: &[u8], algorithm: &str, level_name: &str) -> Result<Vec<u8>> {
    let level = level(level_name)?;
    match algorithm {
        "gzip" => {
            let mut encoder = GzEncoder::new(Vec::new(), level);
            encoder.write_all(data).context("Gzip compression failed")?;
            encoder.finish().context("Gzip compression failed")
        }
        "zlib" => {
            let mut encoder = ZlibEncoder::new(Vec::new(), level);
            encoder.write_all(data).context("Zlib compression failed")?;
            encoder.finish().context("Zlib compression failed")
        }
        other => anyhow::bail!("Unknown compression algorithm '{other}'. Use: gzip or zlib"),
    }
}

pub fn decompress(data: &[u8], algorithm: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match algorithm {
        "gzip" => {
            GzDecoder::new(data)
                .read_to_end(&mut out)
                .context("Gzip decompression failed")?;
        }
        "zlib" => {
            ZlibDecoder::new(data)
                .read_to_end(&mut out)
                .context("Zlib decompression failed")?;
        }
        other => anyhow::bail!("Unknown compression algorithm '{other}'. Use: gzip or zlib"),
    }
    Ok(out)
}

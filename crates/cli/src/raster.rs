//! Image adapter: converts image files to raw planar pixels and back using
//! the `image` crate. Any failure aborts the enclosing conversion.

use anyhow::{Context, Result};
use bin2code_codec::ImageMetadata;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Raw pixels extracted from a decoded image, R,G,B[,A] order.
pub struct RawImage {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Decodes an image file into planar pixel bytes.
///
/// Grayscale and true-color images keep their native channel count (1, 3
/// or 4). Every other color type is composited onto an opaque background
/// and resampled as 3-channel RGB with round-to-nearest components.
pub fn decode_image(data: &[u8]) -> Result<RawImage> {
    let img = image::load_from_memory(data).context("Failed to decode image")?;
    let width = img.width() as usize;
    let height = img.height() as usize;

    let (pixels, channels) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.into_raw(), 1),
        DynamicImage::ImageRgb8(buf) => (buf.into_raw(), 3),
        DynamicImage::ImageRgba8(buf) => (buf.into_raw(), 4),
        other => (flatten_to_rgb(&other.into_rgba8()), 3),
    };

    Ok(RawImage {
        pixels,
        width,
        height,
        channels,
    })
}

/// Composites RGBA pixels onto an opaque background, rounding each
/// component to the nearest integer of its [0,1]-normalized value.
fn flatten_to_rgb(rgba: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        for component in [r, g, b] {
            out.push((component as f32 * alpha).round() as u8);
        }
    }
    out
}

/// Rebuilds an image file from planar pixels recovered by the parser.
///
/// Channel counts below 3 carry too little information to reconstruct a
/// color image and are rejected. Alpha is taken from the fourth channel
/// when present and opaque otherwise.
pub fn encode_image(pixels: &[u8], meta: ImageMetadata, format: &str) -> Result<Vec<u8>> {
    let format = match format {
        "png" => ImageFormat::Png,
        "jpeg" | "jpg" => ImageFormat::Jpeg,
        other => anyhow::bail!("Unknown image format '{other}'. Use: png or jpeg"),
    };

    if meta.width == 0 || meta.height == 0 || meta.channels == 0 {
        anyhow::bail!("Failed to parse image properties");
    }
    if meta.channels < 3 {
        anyhow::bail!("Image with less than 3 channels not supported");
    }

    let mut img = RgbaImage::new(meta.width as u32, meta.height as u32);
    for (index, pixel) in pixels.chunks_exact(meta.channels).enumerate() {
        let x = (index % meta.width) as u32;
        let y = (index / meta.width) as u32;
        if y >= meta.height as u32 {
            break;
        }
        let alpha = if meta.channels == 4 { pixel[3] } else { 255 };
        img.put_pixel(x, y, image::Rgba([pixel[0], pixel[1], pixel[2], alpha]));
    }

    let img = DynamicImage::ImageRgba8(img);
    let mut out = Cursor::new(Vec::new());
    match format {
        // JPEG has no alpha channel; re-encode from RGB.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_to(&mut out, format)
            .context("Failed to encode image")?,
        _ => img
            .write_to(&mut out, format)
            .context("Failed to encode image")?,
    }
    Ok(out.into_inner())
}

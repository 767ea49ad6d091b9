use crate::format::{ContainerStyle, FormatSpec, NumeralStyle};
use crate::metadata::ImageMetadata;

/// Name of the emitted data array. The size constant and the image property
/// variables derive from it.
const DATA_NAME: &str = "sg_data";

const INDENT: &str = "    ";

/// Renders `bytes` as an embeddable array literal according to `spec`.
///
/// Pure function of its inputs. When `metadata` is present, its three
/// properties are written as assignments, one per line, immediately before
/// the container header in width, height, channels order; the parser binds
/// them back by position, so that order is part of the interchange format.
pub fn encode(bytes: &[u8], spec: &FormatSpec, metadata: Option<&ImageMetadata>) -> String {
    // Worst case per byte is a binary token plus separator and wrapping.
    let mut out = String::with_capacity(bytes.len() * 13 + 256);
    let qualifier = spec.qualifier.as_str();

    if let Some(meta) = metadata {
        out.push_str(&format!(
            "{qualifier} int {DATA_NAME}_width = {};\n",
            meta.width
        ));
        out.push_str(&format!(
            "{qualifier} int {DATA_NAME}_height = {};\n",
            meta.height
        ));
        out.push_str(&format!(
            "{qualifier} int {DATA_NAME}_channels = {};\n\n",
            meta.channels
        ));
    }

    match spec.container {
        ContainerStyle::Sized => out.push_str(&format!(
            "{qualifier} std::array<unsigned char, {}> {DATA_NAME} =",
            bytes.len()
        )),
        ContainerStyle::Fixed => {
            out.push_str(&format!("{qualifier} unsigned char {DATA_NAME}[] ="));
        }
    }

    if spec.compact {
        push_compact_body(&mut out, bytes);
    } else {
        push_body(&mut out, bytes, spec.style);
    }

    if spec.container == ContainerStyle::Fixed {
        out.push_str(&format!(
            "{qualifier} unsigned int {DATA_NAME}_size = {};\n",
            bytes.len()
        ));
    }

    out
}

fn push_body(out: &mut String, bytes: &[u8], style: NumeralStyle) {
    out.push_str("\n{\n");
    out.push_str(INDENT);

    let per_line = style.tokens_per_line();
    for (i, &byte) in bytes.iter().enumerate() {
        push_token(out, byte, style);
        if i + 1 != bytes.len() {
            out.push(',');
            if (i + 1) % per_line == 0 {
                out.push('\n');
                out.push_str(INDENT);
            } else {
                out.push(' ');
            }
        }
    }

    out.push_str("\n};\n");
}

/// Smallest possible rendition: unpadded decimal tokens, comma-delimited,
/// no whitespace and no line wrapping.
fn push_compact_body(out: &mut String, bytes: &[u8]) {
    out.push_str(" {");
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!("{byte}"));
    }
    out.push_str("};\n");
}

fn push_token(out: &mut String, byte: u8, style: NumeralStyle) {
    match style {
        NumeralStyle::Hex => out.push_str(&format!("0x{byte:02X}")),
        NumeralStyle::Decimal => out.push_str(&format!("{byte:<3}")),
        NumeralStyle::Binary => out.push_str(&format!("0b{byte:08b}")),
        NumeralStyle::Char => push_char_token(out, byte),
    }
}

/// Printable ASCII becomes a quoted character literal, the escapable
/// control and quote characters become quoted escapes, and everything else
/// falls back to the unquoted hex form.
fn push_char_token(out: &mut String, byte: u8) {
    match byte {
        0 => out.push_str("'\\0'"),
        b'\n' => out.push_str("'\\n'"),
        b'\r' => out.push_str("'\\r'"),
        b'\t' => out.push_str("'\\t'"),
        b'\\' => out.push_str("'\\\\'"),
        b'\'' => out.push_str("'\\''"),
        b'"' => out.push_str("'\\\"'"),
        32..=126 => {
            out.push('\'');
            out.push(byte as char);
            out.push('\'');
        }
        _ => out.push_str(&format!("0x{byte:02X}")),
    }
}

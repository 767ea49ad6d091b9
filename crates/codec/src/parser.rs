use crate::error::CodecError;
use crate::metadata::{ImageMetadata, PartialMetadata};

/// Safety margin kept unconsumed at the end of every chunk.
///
/// The longest token is a binary literal (`0b00000000`, 10 characters) plus
/// its delimiter and surrounding whitespace. Anything closer than this to
/// the end of the buffer is deferred to the next call instead of being
/// scanned, so a token can never be consumed while truncated by a chunk
/// boundary. Shrinking this constant breaks multi-character tokens that
/// straddle a boundary.
pub const CARRY_MARGIN: usize = 20;

/// Outcome of a completed decode operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered byte sequence.
    pub bytes: Vec<u8>,
    /// Image properties, present only when all three assignments were found.
    pub metadata: Option<ImageMetadata>,
    /// Non-fatal token errors encountered while scanning.
    pub errors: Vec<CodecError>,
}

/// Streaming parser for the array-literal text format.
///
/// Feed the text in arbitrarily sized chunks via [`Parser::parse_chunk`] and
/// call [`Parser::finish`] once no more input is available. Any buffer
/// suffix that could still belong to an unfinished token is retained as
/// carry for the next call, so splitting the same text differently never
/// changes the decoded result.
///
/// Token styles are recognized per token from their own syntax (`0x` hex,
/// `0b` binary, bare decimal, quoted char), so mixed-notation input decodes
/// correctly regardless of the style it was encoded with.
#[derive(Debug, Default)]
pub struct Parser {
    started: bool,
    carry: Vec<u8>,
    bytes: Vec<u8>,
    metadata: PartialMetadata,
    errors: Vec<CodecError>,
}

enum TokenScan {
    /// A decoded byte plus the number of input bytes consumed, delimiter
    /// included.
    Byte(u8, usize),
    /// A delimiter with nothing before it, e.g. the container close right
    /// after a character literal. Nothing to decode.
    Skip(usize),
    /// A token that failed numeral parsing; scanning resumes past its
    /// delimiter.
    Malformed(String, usize),
    /// No complete token in view; defer the rest of the buffer.
    Incomplete,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the decoded buffer. The hint is typically the input file
    /// size, an upper bound on the number of decoded bytes.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(hint),
            ..Self::default()
        }
    }

    /// Consumes the next fragment of input text.
    ///
    /// Chunks may be split at any offset, including in the middle of a
    /// token; order must be preserved and every chunk fed exactly once.
    pub fn parse_chunk(&mut self, chunk: &[u8]) {
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(chunk);
        self.carry = self.scan(&buf, CARRY_MARGIN);
    }

    /// Scans `buf` until fewer than `margin` bytes remain unconsumed or an
    /// incomplete token is reached, returning the unconsumed suffix.
    fn scan(&mut self, buf: &[u8], margin: usize) -> Vec<u8> {
        let total = buf.len();
        let mut i = 0;
        while i < total {
            if total - i <= margin {
                return buf[i..].to_vec();
            }

            if !self.started {
                match buf[i] {
                    b'{' => self.started = true,
                    b'=' => {
                        if let Some((value, consumed)) = scan_assignment(&buf[i + 1..]) {
                            self.metadata.fill_next(value);
                            i += consumed;
                        }
                    }
                    _ => {}
                }
                i += 1;
                continue;
            }

            match scan_token(&buf[i..]) {
                TokenScan::Byte(value, consumed) => {
                    self.bytes.push(value);
                    i += consumed;
                }
                TokenScan::Skip(consumed) => i += consumed,
                TokenScan::Malformed(text, consumed) => {
                    self.errors.push(CodecError::MalformedToken(text));
                    i += consumed;
                }
                TokenScan::Incomplete => return buf[i..].to_vec(),
            }
        }
        Vec::new()
    }

    /// Image properties recovered so far, if already complete.
    pub fn metadata(&self) -> Option<ImageMetadata> {
        self.metadata.complete()
    }

    /// Number of bytes decoded so far.
    pub fn decoded_len(&self) -> usize {
        self.bytes.len()
    }

    /// Token errors recorded so far.
    pub fn errors(&self) -> &[CodecError] {
        &self.errors
    }

    /// Signals end-of-input and yields the decode outcome.
    ///
    /// The remaining carry is scanned one final time without the safety
    /// margin, since no further chunk can extend it. A trailing token that
    /// never received its delimiter is discarded rather than reported:
    /// well-formed input always closes its container before the input ends.
    pub fn finish(mut self) -> Decoded {
        let carry = std::mem::take(&mut self.carry);
        self.scan(&carry, 0);
        Decoded {
            bytes: self.bytes,
            metadata: self.metadata.complete(),
            errors: self.errors,
        }
    }
}

/// Scans the text following an `=` for a `;`-terminated unsigned integer.
///
/// Returns the value and the byte count consumed through the `;`. Returns
/// `None` when no terminator is in view or the stripped text is not plain
/// decimal digits; the caller then resumes scanning right after the `=`,
/// which keeps a container header's own `... =` from swallowing the array
/// body when header and close land in the same chunk.
fn scan_assignment(rest: &[u8]) -> Option<(usize, usize)> {
    let end = rest.iter().position(|&b| b == b';')?;
    let digits: Vec<u8> = rest[..end]
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = std::str::from_utf8(&digits).ok()?.parse().ok()?;
    Some((value, end + 1))
}

/// Classifies the token at the start of `rest`, skipping any leading
/// whitespace or separators. A quote starts a character literal; otherwise
/// everything up to the next `,` or `}` is a numeral token.
fn scan_token(rest: &[u8]) -> TokenScan {
    for (i, &b) in rest.iter().enumerate() {
        if b == b'\'' {
            return scan_char_literal(rest, i);
        }
        if b == b',' || b == b'}' {
            return scan_numeral(rest, i);
        }
    }
    TokenScan::Incomplete
}

fn scan_char_literal(rest: &[u8], quote: usize) -> TokenScan {
    match rest.get(quote + 1) {
        Some(b'\\') => {
            let Some(&escape) = rest.get(quote + 2) else {
                return TokenScan::Incomplete;
            };
            let value = match escape {
                b'0' => 0,
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                b'\\' => b'\\',
                b'"' => b'"',
                b'\'' => b'\'',
                _ => {
                    let end = (quote + 4).min(rest.len());
                    let text = String::from_utf8_lossy(&rest[quote..end]).into_owned();
                    return TokenScan::Malformed(text, quote + 5);
                }
            };
            TokenScan::Byte(value, quote + 5)
        }
        Some(&literal) => TokenScan::Byte(literal, quote + 4),
        None => TokenScan::Incomplete,
    }
}

fn scan_numeral(rest: &[u8], delimiter: usize) -> TokenScan {
    let token: Vec<u8> = rest[..delimiter]
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let consumed = delimiter + 1;
    if token.is_empty() {
        return TokenScan::Skip(consumed);
    }
    match parse_numeral(&token) {
        Some(value) => TokenScan::Byte(value, consumed),
        None => {
            let text = String::from_utf8_lossy(&token).into_owned();
            TokenScan::Malformed(text, consumed)
        }
    }
}

/// Decodes a single numeral token, inferring the notation from its prefix:
/// `0x` hex, `0b` binary, bare decimal otherwise. Byte values are confined
/// to 0-255, so anything out of range fails here.
fn parse_numeral(token: &[u8]) -> Option<u8> {
    let text = std::str::from_utf8(token).ok()?;
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).ok();
    }
    if let Some(bits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        return u8::from_str_radix(bits, 2).ok();
    }
    text.parse().ok()
}

//! Textual array-literal codec.
//!
//! Converts byte sequences into embeddable C/C++ array literals and recovers
//! the original bytes from that text. The encoder renders bytes in one of
//! four numeral notations with deterministic layout rules; the parser is a
//! streaming state machine that reconstructs the exact byte sequence (plus
//! optional image properties) from text supplied in arbitrarily sized chunks.

mod encoder;
mod error;
mod format;
mod metadata;
mod parser;

pub use encoder::encode;
pub use error::CodecError as Error;
pub use error::CodecError;
pub use format::{ContainerStyle, FormatSpec, NumeralStyle, Qualifier};
pub use metadata::ImageMetadata;
pub use parser::{Decoded, Parser, CARRY_MARGIN};

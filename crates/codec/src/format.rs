/// Textual notation used for each byte of the array body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumeralStyle {
    /// Two uppercase hexadecimal digits, prefixed `0x`.
    #[default]
    Hex,
    /// Decimal value padded to 3 characters.
    Decimal,
    /// Eight binary digits, prefixed `0b`.
    Binary,
    /// Quoted character literal for printable ASCII, hex fallback otherwise.
    Char,
}

impl NumeralStyle {
    /// Tokens emitted per line before wrapping.
    pub fn tokens_per_line(self) -> usize {
        match self {
            NumeralStyle::Hex | NumeralStyle::Char => 16,
            NumeralStyle::Binary => 8,
            NumeralStyle::Decimal => 19,
        }
    }
}

/// Shape of the emitted container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerStyle {
    /// C-style `unsigned char x[]` array plus a trailing size constant.
    #[default]
    Fixed,
    /// `std::array<unsigned char, N>` annotated with the element count.
    Sized,
}

/// C/C++ declaration qualifier prepended to every emitted variable.
///
/// Cosmetic only: the parser never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Qualifier {
    #[default]
    StaticConst,
    Constexpr,
    InlineConstexpr,
}

impl Qualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Qualifier::StaticConst => "static const",
            Qualifier::Constexpr => "static constexpr",
            Qualifier::InlineConstexpr => "static inline constexpr",
        }
    }
}

/// Full description of how a byte sequence is rendered as text.
///
/// Chosen once per encode operation and never mutated. `compact` overrides
/// `style` entirely: every byte becomes plain unpadded decimal with no
/// inter-token whitespace or line wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub style: NumeralStyle,
    pub container: ContainerStyle,
    pub compact: bool,
    pub qualifier: Qualifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_per_line() {
        assert_eq!(NumeralStyle::Hex.tokens_per_line(), 16);
        assert_eq!(NumeralStyle::Char.tokens_per_line(), 16);
        assert_eq!(NumeralStyle::Binary.tokens_per_line(), 8);
        assert_eq!(NumeralStyle::Decimal.tokens_per_line(), 19);
    }

    #[test]
    fn test_qualifier_text() {
        assert_eq!(Qualifier::StaticConst.as_str(), "static const");
        assert_eq!(Qualifier::Constexpr.as_str(), "static constexpr");
        assert_eq!(
            Qualifier::InlineConstexpr.as_str(),
            "static inline constexpr"
        );
    }
}

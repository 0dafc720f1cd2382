// ============================================================================
// Numeral Codec
// Decimal <-> k.os base-8 translation
// ============================================================================

use crate::domain::{Alphabet, Direction, NumeralString, RADIX};
use crate::numeric::{ConversionError, ConversionResult, DecimalValue, GlyphInputIssue};
use num_bigint::BigUint;

/// Pure, stateless translator between decimal integers and k.os numerals.
///
/// The codec only borrows the process-wide [`Alphabet`], so it is `Copy`
/// and can be used from any number of threads at once.
///
/// # Example
/// ```
/// use kos_numerals::engine::NumeralCodec;
///
/// let codec = NumeralCodec::new();
/// assert_eq!(codec.encode("300").unwrap(), "<X<");
/// assert_eq!(codec.decode("<X<").unwrap().to_string(), "300");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumeralCodec {
    alphabet: &'static Alphabet,
}

impl NumeralCodec {
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::kos(),
        }
    }

    #[inline]
    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Encode decimal text as a k.os numeral.
    ///
    /// The text is parsed exactly as given, see [`DecimalValue::parse`].
    ///
    /// # Errors
    /// Returns `InvalidDecimalInput` if the text is not a non-negative
    /// base-10 integer.
    pub fn encode(&self, decimal_text: &str) -> ConversionResult<NumeralString> {
        let value = DecimalValue::parse(decimal_text)?;
        Ok(self.encode_value(&value))
    }

    /// Encode an already parsed value. Zero becomes the single zero glyph.
    pub fn encode_value(&self, value: &DecimalValue) -> NumeralString {
        // to_radix_be yields [0] for zero, never an empty digit list
        let digits = value.as_biguint().to_radix_be(RADIX);
        let glyphs = self.alphabet.glyphs();

        NumeralString::from_glyphs(digits.into_iter().map(|digit| glyphs[usize::from(digit)]))
    }

    /// Decode a k.os numeral, reading glyphs most significant first.
    ///
    /// Leading zero glyphs are accepted and contribute nothing.
    ///
    /// # Errors
    /// Returns `InvalidGlyphInput` for empty input, or for the first
    /// character that is not in the alphabet. Nothing partial is returned.
    pub fn decode(&self, numeral_text: &str) -> ConversionResult<DecimalValue> {
        if numeral_text.is_empty() {
            return Err(ConversionError::InvalidGlyphInput(GlyphInputIssue::Empty));
        }

        let digits = numeral_text
            .chars()
            .enumerate()
            .map(|(position, glyph)| {
                self.alphabet
                    .digit(glyph)
                    .ok_or(ConversionError::unknown_glyph(glyph, position))
            })
            .collect::<ConversionResult<Vec<u8>>>()?;

        // Positional accumulation, most significant digit first
        let value = BigUint::from_radix_be(&digits, RADIX).expect("alphabet digits are below 8");

        Ok(DecimalValue::from_biguint(value))
    }

    /// Convert in the given direction and render the result as text.
    pub fn convert(&self, direction: Direction, text: &str) -> ConversionResult<String> {
        match direction {
            Direction::ToNumeral => self.encode(text).map(NumeralString::into_string),
            Direction::FromNumeral => self.decode(text).map(|value| value.to_string()),
        }
    }
}

impl Default for NumeralCodec {
    fn default() -> Self {
        Self::new()
    }
}

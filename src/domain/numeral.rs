// ============================================================================
// Numeral String
// Canonical k.os representation produced by the encoder
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A k.os numeral, most significant glyph first.
///
/// Values of this type only come out of the encoder, so they are always
/// canonical: non-empty, and without a leading zero glyph unless the whole
/// numeral is the single zero glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumeralString(String);

impl NumeralString {
    pub(crate) fn from_glyphs(glyphs: impl IntoIterator<Item = char>) -> Self {
        Self(glyphs.into_iter().collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of glyphs (not bytes).
    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Glyphs, most significant first.
    #[inline]
    pub fn glyphs(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for NumeralString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NumeralString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NumeralString> for String {
    fn from(numeral: NumeralString) -> Self {
        numeral.0
    }
}

impl PartialEq<str> for NumeralString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NumeralString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Only canonical text deserializes: it must decode, and encoding the decoded
// value must give back the same glyphs.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumeralString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let text = String::deserialize(deserializer)?;
        let codec = crate::engine::NumeralCodec::new();
        let value = codec.decode(&text).map_err(D::Error::custom)?;
        let canonical = codec.encode_value(&value);

        if canonical.as_str() != text {
            return Err(D::Error::custom(format!(
                "{text:?} is not a canonical k.os numeral (expected {canonical:?})"
            )));
        }

        Ok(canonical)
    }
}

// ============================================================================
// k.os Alphabet
// Fixed bidirectional mapping between base-8 digit values and glyphs
// ============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number base of the k.os numbering system
pub const RADIX: u32 = 8;

/// Glyphs of the k.os numbering system, indexed by digit value.
pub const KOS_GLYPHS: [char; RADIX as usize] = ['0', '|', '>', '/', '<', 'X', '*', '#'];

static KOS_ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_glyphs(KOS_GLYPHS));

/// Immutable digit <-> glyph map.
///
/// There is exactly one instance per process, built on first use and never
/// mutated afterwards. Obtain it with [`Alphabet::kos`].
#[derive(Debug)]
pub struct Alphabet {
    /// digit value -> glyph
    glyphs: [char; RADIX as usize],

    /// glyph -> digit value
    digits: HashMap<char, u8>,
}

impl Alphabet {
    /// The process-wide k.os alphabet.
    #[inline]
    pub fn kos() -> &'static Alphabet {
        &KOS_ALPHABET
    }

    fn from_glyphs(glyphs: [char; RADIX as usize]) -> Self {
        let digits: HashMap<char, u8> = glyphs
            .iter()
            .zip(0u8..)
            .map(|(&glyph, digit)| (glyph, digit))
            .collect();
        debug_assert_eq!(digits.len(), glyphs.len(), "glyphs must be distinct");

        Self { glyphs, digits }
    }

    /// Glyph for a digit value, or `None` if `digit >= 8`.
    #[inline]
    pub fn glyph(&self, digit: u8) -> Option<char> {
        self.glyphs.get(usize::from(digit)).copied()
    }

    /// Digit value of a glyph, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn digit(&self, glyph: char) -> Option<u8> {
        self.digits.get(&glyph).copied()
    }

    #[inline]
    pub fn contains(&self, glyph: char) -> bool {
        self.digits.contains_key(&glyph)
    }

    /// Glyph standing for the value zero.
    #[inline]
    pub fn zero_glyph(&self) -> char {
        self.glyphs[0]
    }

    /// All glyphs in digit order.
    #[inline]
    pub fn glyphs(&self) -> &[char; RADIX as usize] {
        &self.glyphs
    }

    /// `(digit, glyph)` pairs in digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        (0u8..).zip(self.glyphs.iter().copied())
    }
}

// ============================================================================
// Conversion Errors
// Error types for decimal <-> k.os numeral conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a piece of text is not a well-formed non-negative base-10 integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalInputIssue {
    /// No characters at all
    Empty,
    /// Leading minus sign
    Negative,
    /// Decimal point present
    Fractional,
    /// Any other character that is not an ASCII digit
    InvalidCharacter { character: char, position: usize },
}

/// Why a piece of text is not a sequence of k.os glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlyphInputIssue {
    /// No glyphs at all
    Empty,
    /// Character that is not part of the alphabet
    UnknownGlyph { glyph: char, position: usize },
}

/// Errors returned by the numeral codec.
///
/// Both kinds are expected, recoverable conditions caused by user input.
/// Positions are counted in characters, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionError {
    /// Encode input is not a non-negative base-10 integer
    InvalidDecimalInput(DecimalInputIssue),
    /// Decode input contains something other than k.os glyphs
    InvalidGlyphInput(GlyphInputIssue),
}

impl ConversionError {
    /// Shorthand for an unknown glyph at `position`.
    #[inline]
    pub const fn unknown_glyph(glyph: char, position: usize) -> Self {
        ConversionError::InvalidGlyphInput(GlyphInputIssue::UnknownGlyph { glyph, position })
    }

    /// Shorthand for a non-digit character at `position`.
    #[inline]
    pub const fn invalid_character(character: char, position: usize) -> Self {
        ConversionError::InvalidDecimalInput(DecimalInputIssue::InvalidCharacter {
            character,
            position,
        })
    }

    #[inline]
    pub const fn is_decimal_error(&self) -> bool {
        matches!(self, ConversionError::InvalidDecimalInput(_))
    }

    #[inline]
    pub const fn is_glyph_error(&self) -> bool {
        matches!(self, ConversionError::InvalidGlyphInput(_))
    }
}

impl fmt::Display for DecimalInputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalInputIssue::Empty => write!(f, "input is empty"),
            DecimalInputIssue::Negative => write!(f, "negative values have no k.os form"),
            DecimalInputIssue::Fractional => write!(f, "fractional values have no k.os form"),
            DecimalInputIssue::InvalidCharacter {
                character,
                position,
            } => write!(f, "unexpected character {character:?} at position {position}"),
        }
    }
}

impl fmt::Display for GlyphInputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphInputIssue::Empty => write!(f, "input is empty"),
            GlyphInputIssue::UnknownGlyph { glyph, position } => {
                write!(f, "{glyph:?} at position {position} is not a k.os glyph")
            },
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidDecimalInput(issue) => write!(
                f,
                "invalid decimal input: {issue} (are you trying to convert to a decimal?)"
            ),
            ConversionError::InvalidGlyphInput(issue) => write!(
                f,
                "invalid glyph input: {issue} (are you trying to convert to base 8?)"
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for codec operations
pub type ConversionResult<T> = Result<T, ConversionError>;

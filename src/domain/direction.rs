// ============================================================================
// Conversion Direction
// Which way a piece of input text should be converted
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction selector supplied by the caller together with the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// Decimal text in, k.os numeral out
    ToNumeral,
    /// k.os numeral in, decimal text out
    #[default]
    FromNumeral,
}

impl Direction {
    /// The other direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::ToNumeral => Direction::FromNumeral,
            Direction::FromNumeral => Direction::ToNumeral,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::ToNumeral => "to-numeral",
            Direction::FromNumeral => "from-numeral",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-numeral" | "toBase8" => Ok(Direction::ToNumeral),
            "from-numeral" | "fromBase8" => Ok(Direction::FromNumeral),
            other => Err(format!("Unknown conversion direction: {other}")),
        }
    }
}

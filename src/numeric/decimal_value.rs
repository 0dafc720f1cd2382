// ============================================================================
// Decimal Value
// Arbitrary-precision non-negative integer with strict base-10 parsing
// ============================================================================

use super::errors::{ConversionError, ConversionResult, DecimalInputIssue};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A non-negative integer of unbounded magnitude.
///
/// Backed by [`BigUint`], so parsing and conversion never truncate or
/// overflow. The only limit is available memory.
///
/// # Example
/// ```
/// use kos_numerals::numeric::DecimalValue;
///
/// let value: DecimalValue = "300".parse().unwrap();
/// assert_eq!(value.to_u64(), Some(300));
/// assert_eq!(value.to_string(), "300");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalValue(BigUint);

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    #[inline]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Wrap an existing big integer.
    #[inline]
    pub fn from_biguint(value: BigUint) -> Self {
        Self(value)
    }

    /// Parse strictly as written: one or more ASCII digits and nothing else.
    ///
    /// Leading zeros are accepted. Whitespace, signs, separators and decimal
    /// points are not.
    ///
    /// # Errors
    /// Returns `InvalidDecimalInput` describing the first problem found.
    pub fn parse(text: &str) -> ConversionResult<Self> {
        if text.is_empty() {
            return Err(ConversionError::InvalidDecimalInput(DecimalInputIssue::Empty));
        }

        for (position, character) in text.chars().enumerate() {
            match character {
                '0'..='9' => {},
                '-' if position == 0 => {
                    return Err(ConversionError::InvalidDecimalInput(
                        DecimalInputIssue::Negative,
                    ));
                },
                '.' => {
                    return Err(ConversionError::InvalidDecimalInput(
                        DecimalInputIssue::Fractional,
                    ));
                },
                _ => return Err(ConversionError::invalid_character(character, position)),
            }
        }

        let value = BigUint::parse_bytes(text.as_bytes(), 10)
            .expect("non-empty ASCII digits always parse");
        Ok(Self(value))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of bits needed to represent the value (zero for zero).
    #[inline]
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Narrow to `u64`, or `None` if the value does not fit.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Narrow to `u128`, or `None` if the value does not fit.
    #[inline]
    pub fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalValue {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Only integral, non-negative values are accepted. `5.00` is fine,
    /// `5.01` is not.
    ///
    /// # Errors
    /// - `InvalidDecimalInput(Negative)` for values below zero
    /// - `InvalidDecimalInput(Fractional)` if a fractional part remains
    pub fn from_decimal(d: Decimal) -> ConversionResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(ConversionError::InvalidDecimalInput(DecimalInputIssue::Negative));
        }

        let normalized = d.normalize();
        if normalized.scale() != 0 {
            return Err(ConversionError::InvalidDecimalInput(DecimalInputIssue::Fractional));
        }

        u128::try_from(normalized.mantissa())
            .map(Self::from)
            .map_err(|_| ConversionError::InvalidDecimalInput(DecimalInputIssue::Negative))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Returns `None` when the value exceeds the 96-bit range of `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let raw = i128::try_from(self.to_u128()?).ok()?;
        Decimal::try_from_i128_with_scale(raw, 0).ok()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for DecimalValue {
    type Err = ConversionError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for DecimalValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for DecimalValue {
    #[inline]
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for DecimalValue {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Serialized as a base-10 string so large values survive JSON.
#[cfg(feature = "serde")]
impl serde::Serialize for DecimalValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Property-based tests for the numeral codec.
//!
//! Uses proptest (and one quickcheck property) to check the codec against
//! randomly generated values and numerals.

use crate::domain::{Alphabet, KOS_GLYPHS};
use crate::engine::NumeralCodec;
use crate::numeric::{ConversionError, DecimalValue};
use proptest::prelude::*;

/// Canonical numeral: non-zero leading glyph followed by any glyphs.
fn canonical_numeral() -> impl Strategy<Value = String> {
    (
        prop::sample::select(KOS_GLYPHS[1..].to_vec()),
        prop::collection::vec(prop::sample::select(KOS_GLYPHS.to_vec()), 0..40),
    )
        .prop_map(|(head, tail)| std::iter::once(head).chain(tail).collect())
}

/// Same value written with std octal digits, for cross-checking.
fn via_std_octal(n: u128) -> String {
    format!("{n:o}")
        .bytes()
        .map(|digit| KOS_GLYPHS[usize::from(digit - b'0')])
        .collect()
}

// ========================================================================
// Round Trips
// ========================================================================

proptest! {
    /// decode(encode(n)) == n for machine-sized values.
    #[test]
    fn prop_round_trip_u128(n in any::<u128>()) {
        let codec = NumeralCodec::new();
        let numeral = codec.encode(&n.to_string()).unwrap();
        let back = codec.decode(numeral.as_str()).unwrap();
        prop_assert_eq!(back.to_u128(), Some(n));
    }

    /// decode(encode(n)) == n far beyond any fixed-width type.
    #[test]
    fn prop_round_trip_big(text in "[1-9][0-9]{0,120}") {
        let codec = NumeralCodec::new();
        let numeral = codec.encode(&text).unwrap();
        prop_assert_eq!(codec.decode(numeral.as_str()).unwrap().to_string(), text);
    }

    /// encode(decode(s)) == s for canonical numerals.
    #[test]
    fn prop_round_trip_numeral(numeral in canonical_numeral()) {
        let codec = NumeralCodec::new();
        let value = codec.decode(&numeral).unwrap();
        prop_assert_eq!(codec.encode_value(&value).into_string(), numeral);
    }
}

// ========================================================================
// Encoding Shape
// ========================================================================

proptest! {
    /// Encoding agrees with std octal formatting digit for digit.
    #[test]
    fn prop_matches_std_octal(n in any::<u128>()) {
        let numeral = NumeralCodec::new().encode_value(&DecimalValue::from(n));
        prop_assert_eq!(numeral.into_string(), via_std_octal(n));
    }

    /// No leading zero glyph except for zero itself.
    #[test]
    fn prop_no_leading_zero_glyph(n in any::<u64>()) {
        let numeral = NumeralCodec::new().encode(&n.to_string()).unwrap();
        let zero = Alphabet::kos().zero_glyph();
        if n == 0 {
            prop_assert_eq!(numeral.as_str(), "0");
        } else {
            prop_assert_ne!(numeral.glyphs().next(), Some(zero));
        }
    }

    /// Leading zeros in decimal text do not change the encoding.
    #[test]
    fn prop_leading_decimal_zeros_ignored(n in any::<u64>(), zeros in 0usize..5) {
        let codec = NumeralCodec::new();
        let padded = format!("{}{}", "0".repeat(zeros), n);
        prop_assert_eq!(codec.encode(&padded).unwrap(), codec.encode(&n.to_string()).unwrap());
    }
}

// ========================================================================
// Decoding Order
// ========================================================================

proptest! {
    /// Decoding is the left-to-right positional fold.
    #[test]
    fn prop_decode_is_left_fold(digits in prop::collection::vec(0u8..8, 1..20)) {
        let numeral: String = digits.iter().map(|&d| KOS_GLYPHS[usize::from(d)]).collect();
        let expected = digits.iter().fold(0u128, |acc, &d| acc * 8 + u128::from(d));

        let value = NumeralCodec::new().decode(&numeral).unwrap();
        prop_assert_eq!(value.to_u128(), Some(expected));
    }

    /// Appending a glyph multiplies by eight and adds its digit.
    #[test]
    fn prop_append_glyph(n in any::<u64>(), digit in 0u8..8) {
        let codec = NumeralCodec::new();
        let mut numeral = codec.encode(&n.to_string()).unwrap().into_string();
        numeral.push(KOS_GLYPHS[usize::from(digit)]);

        let expected = u128::from(n) * 8 + u128::from(digit);
        prop_assert_eq!(codec.decode(&numeral).unwrap().to_u128(), Some(expected));
    }
}

// ========================================================================
// Rejection
// ========================================================================

proptest! {
    /// Any foreign character fails decoding at its own position.
    #[test]
    fn prop_foreign_glyph_rejected(
        prefix in canonical_numeral(),
        foreign in any::<char>().prop_filter("not a glyph", |c| !KOS_GLYPHS.contains(c)),
        suffix in canonical_numeral(),
    ) {
        let input = format!("{prefix}{foreign}{suffix}");
        let position = prefix.chars().count();
        prop_assert_eq!(
            NumeralCodec::new().decode(&input),
            Err(ConversionError::unknown_glyph(foreign, position))
        );
    }

    /// Anything containing a non-digit fails encoding as decimal input.
    #[test]
    fn prop_non_digit_rejected(
        digits in "[0-9]{0,10}",
        other in any::<char>().prop_filter("not a digit", |c| !c.is_ascii_digit()),
    ) {
        let input = format!("{digits}{other}");
        let err = NumeralCodec::new().encode(&input).unwrap_err();
        prop_assert!(err.is_decimal_error());
    }
}

// ========================================================================
// QuickCheck
// ========================================================================

quickcheck::quickcheck! {
    fn qc_round_trip_u64(n: u64) -> bool {
        let codec = NumeralCodec::new();
        codec
            .encode(&n.to_string())
            .and_then(|numeral| codec.decode(numeral.as_str()))
            .map(|value| value.to_u64() == Some(n))
            .unwrap_or(false)
    }
}

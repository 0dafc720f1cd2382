// ============================================================================
// Numeric Module
// Decimal side of the codec: values and the errors conversions can raise
// ============================================================================
//
// This module provides:
// - DecimalValue: arbitrary-precision non-negative integer
// - ConversionError: the two error kinds returned by the codec
//
// Design principles:
// - No floating-point operations
// - No fixed-width overflow: values are BigUint-backed
// - All parsing returns Result (no panics)

mod decimal_value;
mod errors;

pub use decimal_value::DecimalValue;
pub use errors::{ConversionError, ConversionResult, DecimalInputIssue, GlyphInputIssue};

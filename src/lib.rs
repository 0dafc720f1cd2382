// ============================================================================
// k.os Numerals Library
// Conversion between decimal integers and the k.os base-8 glyph system
// ============================================================================

//! # k.os Numerals
//!
//! A codec between standard base-10 integers and the k.os numbering system,
//! a base-8 notation written with the glyphs `0 | > / < X * #` instead of the
//! digits 0 to 7.
//!
//! ## Features
//!
//! - **Exact conversions** of arbitrarily large non-negative integers
//! - **Strict input validation** with errors a UI can show verbatim
//! - **Stateless codec** usable from any number of threads
//! - **Converter sessions** holding direction and output for a UI layer
//!
//! ## Example
//!
//! ```rust
//! use kos_numerals::prelude::*;
//! use std::sync::Arc;
//!
//! // Direct codec use
//! let codec = NumeralCodec::new();
//! assert_eq!(codec.encode("300").unwrap(), "<X<");
//! assert_eq!(codec.decode("<X<").unwrap().to_string(), "300");
//!
//! // Session driven by a view layer
//! let session = ConverterSessionBuilder::new()
//!     .encode_mode()
//!     .build(Arc::new(NoOpObserver))
//!     .unwrap();
//!
//! assert_eq!(session.convert("8").unwrap(), "|0");
//! session.toggle_direction();
//! assert!(session.convert("Z").is_err());
//! println!("Output: {:?}", session.last_output());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(test)]
mod property_tests;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Alphabet, ConverterConfig, Direction, NumeralString};
    pub use crate::engine::{
        create_from_config, ConverterSession, ConverterSessionBuilder, NumeralCodec,
        SessionError,
    };
    pub use crate::interfaces::{
        ConversionEvent, ConversionObserver, LoggingObserver, NoOpObserver,
    };
    pub use crate::numeric::{ConversionError, DecimalValue};
}

/// Encode decimal text with the k.os alphabet.
///
/// Shorthand for [`NumeralCodec::encode`](engine::NumeralCodec::encode).
pub fn encode(decimal_text: &str) -> numeric::ConversionResult<domain::NumeralString> {
    engine::NumeralCodec::new().encode(decimal_text)
}

/// Decode a k.os numeral.
///
/// Shorthand for [`NumeralCodec::decode`](engine::NumeralCodec::decode).
pub fn decode(numeral_text: &str) -> numeric::ConversionResult<numeric::DecimalValue> {
    engine::NumeralCodec::new().decode(numeral_text)
}

// ============================================================================
// Domain Models Module
// Alphabet, numerals, direction and converter configuration
// ============================================================================

pub mod alphabet;
pub mod config;
pub mod direction;
pub mod numeral;

pub use alphabet::{Alphabet, KOS_GLYPHS, RADIX};
pub use config::ConverterConfig;
pub use direction::Direction;
pub use numeral::NumeralString;

// ============================================================================
// Engine Module
// Contains the codec and the session that drives it
// ============================================================================

mod converter_session;
mod numeral_codec;

pub mod factory;

pub use converter_session::{ConverterSession, SessionError, SessionResult};
pub use factory::{create_from_config, ConverterSessionBuilder};
pub use numeral_codec::NumeralCodec;

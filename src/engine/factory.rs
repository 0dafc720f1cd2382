// ============================================================================
// Converter Session Factory
// Creates converter sessions with proper configuration
// ============================================================================

use crate::domain::{ConverterConfig, Direction};
use crate::engine::ConverterSession;
use crate::interfaces::ConversionObserver;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter session from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `observer` - Observer for conversion events
///
/// # Returns
/// * `Result<ConverterSession, String>` - Configured session or error
///
/// # Example
/// ```
/// use kos_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::web_widget();
/// let session = create_from_config(config, Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(session.convert("<X<").unwrap(), "300");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    observer: Arc<dyn ConversionObserver>,
) -> Result<ConverterSession, String> {
    config.validate()?;

    tracing::debug!(
        direction = %config.initial_direction,
        trim_input = config.trim_input,
        max_input_len = ?config.max_input_len,
        "creating converter session"
    );

    Ok(ConverterSession::new(config, observer))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converter sessions with fluent API
///
/// # Example
/// ```
/// use kos_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let session = ConverterSessionBuilder::new()
///     .encode_mode()
///     .trim_input()
///     .with_max_input_len(128)
///     .build(Arc::new(NoOpObserver))
///     .unwrap();
///
/// assert_eq!(session.convert(" 8 ").unwrap(), "|0");
/// ```
pub struct ConverterSessionBuilder {
    config: ConverterConfig,
}

impl ConverterSessionBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
        }
    }

    // ========================================================================
    // Direction
    // ========================================================================

    /// Start in decimal -> numeral mode
    pub fn encode_mode(mut self) -> Self {
        self.config.initial_direction = Direction::ToNumeral;
        self
    }

    /// Start in numeral -> decimal mode (default)
    pub fn decode_mode(mut self) -> Self {
        self.config.initial_direction = Direction::FromNumeral;
        self
    }

    // ========================================================================
    // Input Handling
    // ========================================================================

    /// Trim surrounding whitespace before converting
    pub fn trim_input(mut self) -> Self {
        self.config.trim_input = true;
        self
    }

    /// Set maximum input length in characters
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.config.max_input_len = Some(max);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the web widget configuration
    pub fn web_widget() -> Self {
        Self {
            config: ConverterConfig::web_widget(),
        }
    }

    /// Apply form-field configuration
    pub fn form_field(initial_direction: Direction) -> Self {
        Self {
            config: ConverterConfig::form_field(initial_direction),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter session
    pub fn build(self, observer: Arc<dyn ConversionObserver>) -> Result<ConverterSession, String> {
        create_from_config(self.config, observer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for ConverterSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpObserver;

    #[test]
    fn test_create_from_default_config() {
        let session =
            create_from_config(ConverterConfig::default(), Arc::new(NoOpObserver)).unwrap();
        assert_eq!(session.direction(), Direction::FromNumeral);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = ConverterConfig::default().with_max_input_len(0);
        assert!(create_from_config(config, Arc::new(NoOpObserver)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let session = ConverterSessionBuilder::new()
            .encode_mode()
            .trim_input()
            .build(Arc::new(NoOpObserver))
            .unwrap();

        assert_eq!(session.direction(), Direction::ToNumeral);
        assert!(session.config().trim_input);
        assert_eq!(session.convert("\t300").unwrap(), "<X<");
    }

    #[test]
    fn test_builder_inspection() {
        let builder = ConverterSessionBuilder::new().encode_mode().decode_mode();
        assert_eq!(builder.get_config().initial_direction, Direction::FromNumeral);
        assert_eq!(builder.get_config().max_input_len, None);
    }

    #[test]
    fn test_preset_builders() {
        let widget = ConverterSessionBuilder::web_widget()
            .build(Arc::new(NoOpObserver))
            .unwrap();
        assert_eq!(widget.direction(), Direction::FromNumeral);

        let form = ConverterSessionBuilder::form_field(Direction::ToNumeral)
            .build(Arc::new(NoOpObserver))
            .unwrap();
        assert_eq!(form.config().max_input_len, Some(4096));
    }

    #[test]
    fn test_builder_zero_limit_fails() {
        let result = ConverterSessionBuilder::new()
            .with_max_input_len(0)
            .build(Arc::new(NoOpObserver));
        assert!(result.is_err());
    }
}

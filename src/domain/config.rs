// ============================================================================
// Converter Configuration
// How a converter session prepares input before handing it to the codec
// ============================================================================

use super::direction::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`ConverterSession`](crate::engine::ConverterSession).
///
/// None of these settings change codec semantics. They only decide what
/// text reaches the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Direction selected when the session is created
    pub initial_direction: Direction,

    /// Strip surrounding whitespace before converting
    /// The codec itself never trims
    pub trim_input: bool,

    /// Optional: Refuse inputs longer than this many characters
    /// None means unlimited length
    pub max_input_len: Option<usize>,
}

impl ConverterConfig {
    /// Create a new configuration starting in the given direction
    pub fn new(initial_direction: Direction) -> Self {
        Self {
            initial_direction,
            trim_input: false,
            max_input_len: None,
        }
    }

    /// Builder method: Trim surrounding whitespace
    pub fn with_trimmed_input(mut self) -> Self {
        self.trim_input = true;
        self
    }

    /// Builder method: Set maximum input length
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_len == Some(0) {
            return Err("Maximum input length must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Web widget configuration
    /// - Starts in "from base 8" mode
    /// - Converts text exactly as typed
    pub fn web_widget() -> Self {
        Self::new(Direction::FromNumeral)
    }

    /// Form-field friendly configuration
    /// - Trims pasted whitespace
    /// - Caps input at 4096 characters
    pub fn form_field(initial_direction: Direction) -> Self {
        Self::new(initial_direction)
            .with_trimmed_input()
            .with_max_input_len(4096)
    }
}

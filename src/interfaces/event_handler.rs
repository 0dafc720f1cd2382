// ============================================================================
// Conversion Observer Interface
// Defines the contract for reacting to conversions made by a session
// ============================================================================

use crate::domain::Direction;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a converter session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Input handed to the session
    Requested {
        sequence: u64,
        direction: Direction,
        input: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion succeeded
    Completed {
        sequence: u64,
        direction: Direction,
        output: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion refused, with the message shown to the user
    Failed {
        sequence: u64,
        direction: Direction,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    pub fn sequence(&self) -> u64 {
        match self {
            ConversionEvent::Requested { sequence, .. }
            | ConversionEvent::Completed { sequence, .. }
            | ConversionEvent::Failed { sequence, .. } => *sequence,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            ConversionEvent::Requested { direction, .. }
            | ConversionEvent::Completed { direction, .. }
            | ConversionEvent::Failed { direction, .. } => *direction,
        }
    }
}

/// Observer trait for conversion events
/// Implementations can handle logging, metrics, history panels, etc.
pub trait ConversionObserver: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer for testing
pub struct NoOpObserver;

impl ConversionObserver for NoOpObserver {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl ConversionObserver for LoggingObserver {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Failed {
                sequence, reason, ..
            } => tracing::debug!(sequence, reason = %reason, "conversion failed"),
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

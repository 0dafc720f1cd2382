// ============================================================================
// Converter Session
// Headless state behind a converter widget: direction, last output, events
// ============================================================================

use super::numeral_codec::NumeralCodec;
use crate::domain::{ConverterConfig, Direction};
use crate::interfaces::{ConversionEvent, ConversionObserver};
use crate::numeric::ConversionError;
use chrono::Utc;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by [`ConverterSession::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionError {
    /// The codec refused the input
    Conversion(ConversionError),
    /// Input exceeded the configured length limit
    InputTooLong { len: usize, max: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Conversion(err) => write!(f, "{err}"),
            SessionError::InputTooLong { len, max } => write!(
                f,
                "input too long: {len} characters, at most {max} allowed"
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Conversion(err) => Some(err),
            SessionError::InputTooLong { .. } => None,
        }
    }
}

impl From<ConversionError> for SessionError {
    fn from(err: ConversionError) -> Self {
        SessionError::Conversion(err)
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// What the view currently shows, tagged with the request that produced it.
#[derive(Debug, Default)]
struct DisplayedOutput {
    /// Newest request whose result has been recorded
    sequence: Option<u64>,
    text: Option<String>,
}

/// Converter session shared between a UI layer and its event handlers.
///
/// Every call to [`convert`](Self::convert) is independent. The session only
/// remembers which direction is selected and what was last displayed.
pub struct ConverterSession {
    /// Stateless codec doing the actual work
    codec: NumeralCodec,

    /// Input preparation settings
    config: ConverterConfig,

    /// Currently selected direction
    direction: RwLock<Direction>,

    /// Text last rendered to the user (result or error message)
    last_output: RwLock<DisplayedOutput>,

    /// Observer for conversion events
    observer: Arc<dyn ConversionObserver>,

    /// Sequence counter for conversion requests
    sequence_counter: AtomicU64,
}

impl ConverterSession {
    /// Create a new session
    pub fn new(config: ConverterConfig, observer: Arc<dyn ConversionObserver>) -> Self {
        Self {
            codec: NumeralCodec::new(),
            direction: RwLock::new(config.initial_direction),
            config,
            last_output: RwLock::new(DisplayedOutput::default()),
            observer,
            sequence_counter: AtomicU64::new(0),
        }
    }

    /// Convert `input` in the selected direction.
    ///
    /// On success the converted text is returned and remembered as the last
    /// output. On failure the error message is remembered instead, so a view
    /// can always render [`last_output`](Self::last_output) verbatim.
    ///
    /// When the session is shared between threads, a request that finishes
    /// after a newer one does not replace the newer request's output.
    pub fn convert(&self, input: &str) -> SessionResult<String> {
        let sequence = self.sequence_counter.fetch_add(1, Ordering::AcqRel);
        let direction = self.direction();

        let mut events = Vec::with_capacity(2);
        events.push(ConversionEvent::Requested {
            sequence,
            direction,
            input: input.to_string(),
            timestamp: Utc::now(),
        });

        let result = self
            .prepare(input)
            .and_then(|text| {
                self.codec
                    .convert(direction, text)
                    .map_err(SessionError::from)
            });

        let rendered = match &result {
            Ok(output) => {
                events.push(ConversionEvent::Completed {
                    sequence,
                    direction,
                    output: output.clone(),
                    timestamp: Utc::now(),
                });
                output.clone()
            },
            Err(err) => {
                let reason = err.to_string();
                events.push(ConversionEvent::Failed {
                    sequence,
                    direction,
                    reason: reason.clone(),
                    timestamp: Utc::now(),
                });
                reason
            },
        };

        tracing::trace!(sequence, %direction, ok = result.is_ok(), "conversion finished");

        self.record_output(sequence, rendered);
        self.observer.on_events(events);

        result
    }

    /// Store `rendered` unless a newer request already recorded its output.
    fn record_output(&self, sequence: u64, rendered: String) {
        let mut shown = self.last_output.write();
        if shown.sequence.is_some_and(|newest| newest > sequence) {
            tracing::trace!(sequence, "dropping output of superseded conversion");
            return;
        }
        shown.sequence = Some(sequence);
        shown.text = Some(rendered);
    }

    /// Apply trimming and length limits. No conversion happens here.
    fn prepare<'a>(&self, input: &'a str) -> SessionResult<&'a str> {
        let text = if self.config.trim_input {
            input.trim()
        } else {
            input
        };

        if let Some(max) = self.config.max_input_len {
            let len = text.chars().count();
            if len > max {
                return Err(SessionError::InputTooLong { len, max });
            }
        }

        Ok(text)
    }

    /// Currently selected direction
    pub fn direction(&self) -> Direction {
        *self.direction.read()
    }

    /// Select a direction
    pub fn set_direction(&self, direction: Direction) {
        *self.direction.write() = direction;
    }

    /// Flip the direction and return the new one
    pub fn toggle_direction(&self) -> Direction {
        let mut direction = self.direction.write();
        *direction = direction.opposite();
        *direction
    }

    /// Text last produced by [`convert`](Self::convert), if any
    pub fn last_output(&self) -> Option<String> {
        self.last_output.read().text.clone()
    }

    /// Forget the last output. The selected direction is kept.
    pub fn reset(&self) {
        self.last_output.write().text = None;
    }

    /// Number of conversions requested so far, failed ones included
    pub fn conversions_performed(&self) -> u64 {
        self.sequence_counter.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn codec(&self) -> NumeralCodec {
        self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpObserver;
    use crate::numeric::{DecimalInputIssue, GlyphInputIssue};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<ConversionEvent>>,
    }

    impl ConversionObserver for RecordingObserver {
        fn on_event(&self, event: ConversionEvent) {
            self.events.lock().push(event);
        }
    }

    fn session(config: ConverterConfig) -> ConverterSession {
        ConverterSession::new(config, Arc::new(NoOpObserver))
    }

    #[test]
    fn test_starts_in_configured_direction() {
        let s = session(ConverterConfig::web_widget());
        assert_eq!(s.direction(), Direction::FromNumeral);
        assert_eq!(s.last_output(), None);

        let s = session(ConverterConfig::new(Direction::ToNumeral));
        assert_eq!(s.direction(), Direction::ToNumeral);
    }

    #[test]
    fn test_convert_follows_direction() {
        let s = session(ConverterConfig::default());

        assert_eq!(s.convert("<X<"), Ok("300".to_string()));
        assert_eq!(s.last_output().as_deref(), Some("300"));

        assert_eq!(s.toggle_direction(), Direction::ToNumeral);
        assert_eq!(s.convert("300"), Ok("<X<".to_string()));
        assert_eq!(s.last_output().as_deref(), Some("<X<"));
    }

    #[test]
    fn test_error_message_becomes_output() {
        let s = session(ConverterConfig::new(Direction::ToNumeral));

        let err = s.convert("-5").unwrap_err();
        assert_eq!(
            err,
            SessionError::Conversion(ConversionError::InvalidDecimalInput(
                DecimalInputIssue::Negative
            ))
        );
        assert_eq!(s.last_output(), Some(err.to_string()));
    }

    #[test]
    fn test_no_trimming_by_default() {
        let s = session(ConverterConfig::new(Direction::ToNumeral));
        assert!(s.convert(" 8 ").is_err());
    }

    #[test]
    fn test_trimming_when_configured() {
        let s = session(ConverterConfig::new(Direction::ToNumeral).with_trimmed_input());
        assert_eq!(s.convert(" 8 \n"), Ok("|0".to_string()));

        // Whitespace-only input trims down to empty
        s.set_direction(Direction::FromNumeral);
        assert_eq!(
            s.convert("   "),
            Err(SessionError::Conversion(ConversionError::InvalidGlyphInput(
                GlyphInputIssue::Empty
            )))
        );
    }

    #[test]
    fn test_length_limit() {
        let s = session(ConverterConfig::new(Direction::FromNumeral).with_max_input_len(3));

        assert_eq!(s.convert("<X<"), Ok("300".to_string()));
        assert_eq!(
            s.convert("<X<#"),
            Err(SessionError::InputTooLong { len: 4, max: 3 })
        );
    }

    #[test]
    fn test_counts_and_reset() {
        let s = session(ConverterConfig::default());
        s.convert("|").unwrap();
        s.convert("Z").unwrap_err();

        assert_eq!(s.conversions_performed(), 2);
        assert!(s.last_output().is_some());

        s.reset();
        assert_eq!(s.last_output(), None);
        assert_eq!(s.direction(), Direction::FromNumeral);
    }

    #[test]
    fn test_events_emitted() {
        let observer = Arc::new(RecordingObserver::default());
        let s = ConverterSession::new(ConverterConfig::default(), observer.clone());

        s.convert("|0").unwrap();
        s.convert("?").unwrap_err();

        let events = observer.events.lock();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            ConversionEvent::Requested { sequence: 0, input, .. } if input == "|0"
        ));
        assert!(matches!(
            &events[1],
            ConversionEvent::Completed { sequence: 0, output, .. } if output == "8"
        ));
        assert!(matches!(&events[2], ConversionEvent::Requested { sequence: 1, .. }));
        assert!(matches!(&events[3], ConversionEvent::Failed { sequence: 1, .. }));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = SessionError::from(ConversionError::unknown_glyph('?', 0));
        assert!(err.source().is_some());
        assert!(SessionError::InputTooLong { len: 2, max: 1 }.source().is_none());
    }

    #[test]
    fn test_late_result_does_not_replace_newer_output() {
        let s = session(ConverterConfig::default());

        // Request 1 finishes first, request 0 finishes late
        s.record_output(1, "1".to_string());
        s.record_output(0, "8".repeat(1000));
        assert_eq!(s.last_output().as_deref(), Some("1"));

        s.record_output(2, "2".to_string());
        assert_eq!(s.last_output().as_deref(), Some("2"));
    }

    #[test]
    fn test_late_result_after_reset_stays_hidden() {
        let s = session(ConverterConfig::default());
        s.record_output(1, "1".to_string());
        s.reset();

        s.record_output(0, "stale".to_string());
        assert_eq!(s.last_output(), None);
    }

    #[test]
    fn test_sequential_calls_show_latest_output() {
        let s = session(ConverterConfig::default());
        let huge = "#".repeat(10_000);

        s.convert(&huge).unwrap();
        assert_eq!(s.convert("|"), Ok("1".to_string()));
        assert_eq!(s.last_output().as_deref(), Some("1"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_session_error_serde() {
        let errors = [
            SessionError::InputTooLong { len: 5, max: 3 },
            SessionError::from(ConversionError::unknown_glyph('Z', 2)),
        ];
        for err in errors {
            let json = serde_json::to_string(&err).unwrap();
            assert_eq!(serde_json::from_str::<SessionError>(&json).unwrap(), err);
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let s = Arc::new(session(ConverterConfig::new(Direction::ToNumeral)));

        let handles: Vec<_> = (0u64..4)
            .map(|i| {
                let s = Arc::clone(&s);
                std::thread::spawn(move || s.convert(&(i * 8).to_string()).is_ok())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(s.conversions_performed(), 4);
    }
}

// Error kinds surfaced by the counter source, selector and rate engine.

use thiserror::Error;

/// Failure of a single sampling attempt.
///
/// `Clone` so a tick's error can live inside the published display state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// No usable (non-loopback, non-excluded) interface exists.
    #[error("{0}")]
    NoInterface(String),
    /// The OS counter query itself failed.
    #[error("counter source: {0}")]
    CounterSource(String),
}

impl MonitorError {
    pub fn no_interface(message: impl Into<String>) -> Self {
        MonitorError::NoInterface(message.into())
    }

    pub fn counter_source(message: impl Into<String>) -> Self {
        MonitorError::CounterSource(message.into())
    }
}

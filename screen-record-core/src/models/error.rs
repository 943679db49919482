use thiserror::Error;

/// Errors surfaced by the capture controller.
///
/// Every variant is reported to the `RecorderDelegate` before it is returned.
/// A cancelled save dialog is not an error and never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("source enumeration failed: {0}")]
    SourceEnumeration(String),

    #[error("stream acquisition failed: {0}")]
    StreamAcquisition(String),

    #[error("cannot {operation} while {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: &'static str,
    },

    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("configuration invalid: {0}")]
    Configuration(String),
}

impl RecordError {
    pub fn invalid_transition(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidStateTransition { operation, state }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidStateTransition { .. })
    }
}

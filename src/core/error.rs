//! Error handling logic

use thiserror::Error;

/// Errors produced while preparing, evolving or measuring the qubit.
///
/// Every variant is recoverable at the session level: a failed request leaves
/// the current state, its history and the last statistics exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QubitError {
    /// Amplitude text could not be read as a complex number.
    #[error("Invalid complex number input '{input}': {reason}")]
    InputParse {
        /// The offending text, as typed.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Amplitudes cannot describe a physical state (both zero, or not finite).
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Why the amplitude pair was rejected.
        reason: String,
    },

    /// Gate identifier outside `{NONE, H, X, Y, Z}`.
    #[error("Unsupported gate '{0}': expected one of NONE, H, X, Y, Z")]
    UnsupportedGate(String),

    /// An update, statistics read or report was requested before any successful initialization.
    #[error("No qubit: initialize the qubit first")]
    NotInitialized,

    /// Shot count must be at least 1.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(usize),
}

impl QubitError {
    /// Builds an [`QubitError::InputParse`] for `input`.
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        QubitError::InputParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// `true` for conditions the front end shows as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, QubitError::NotInitialized)
    }
}

/// Result type for qubit operations.
pub type QubitResult<T> = Result<T, QubitError>;

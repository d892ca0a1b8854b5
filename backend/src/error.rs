//! Error types for the phase model and its calendar helpers.

use chrono::NaiveDate;

/// Result type for core computations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the calendar, solstice and phase-cycle layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// Malformed or out-of-range date input. The request is rejected as a whole.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The offending input as received (or as rendered, for computed dates).
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Segment resolution found zero or several segments covering a date.
    ///
    /// This is a defect in segment construction, never a valid runtime state.
    #[error("segment resolution for {date} matched {matches} segments (expected exactly 1)")]
    SegmentResolutionInvariantViolation {
        /// The query date.
        date: NaiveDate,
        /// How many segments claimed the date.
        matches: usize,
    },
}

impl CoreError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error originates from caller input rather than an internal defect.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::InvalidDate { .. })
    }
}

//! Error types for Lattice Refresh core systems.

use thiserror::Error;

/// The main error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Timer-related error.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),
}

/// Timer-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid, has already fired, or was cancelled.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_error_converts_into_core_error() {
        let err: CoreError = TimerError::InvalidTimerId.into();
        assert!(matches!(err, CoreError::Timer(TimerError::InvalidTimerId)));
        assert_eq!(err.to_string(), "Timer error: Invalid or expired timer ID");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err: CoreError = TimerError::InvalidTimerId.into();
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Invalid or expired timer ID"));
    }
}

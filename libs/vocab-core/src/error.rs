//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors reported by the scheduling and session engine.
///
/// All of these are local and recoverable; none of them indicate a broken
/// vocabulary collection.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("no cards match the selection (hard only: {hard_only})")]
    EmptySelection { hard_only: bool },

    #[error("cannot start a session with an empty queue")]
    EmptyQueue,

    #[error("invalid grade {value}, expected 0 to 5")]
    InvalidGrade { value: i32 },

    #[error("session has no incorrect results to retry")]
    NoIncorrectResults,

    #[error("window size must be positive, got {size}")]
    InvalidWindowSize { size: usize },

    #[error("window {index} does not exist in chapter {chapter} ({available} windows)")]
    WindowNotFound {
        chapter: u32,
        index: usize,
        available: usize,
    },

    #[error("session is already complete")]
    SessionComplete,

    #[error("session is still in progress")]
    SessionInProgress,

    #[error("session lock poisoned")]
    SessionLockPoisoned,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_selection() {
        let error = DrillError::EmptySelection { hard_only: true };
        assert_eq!(error.to_string(), "no cards match the selection (hard only: true)");
    }

    #[test]
    fn display_empty_queue() {
        assert_eq!(
            DrillError::EmptyQueue.to_string(),
            "cannot start a session with an empty queue"
        );
    }

    #[test]
    fn display_invalid_grade() {
        let error = DrillError::InvalidGrade { value: 7 };
        assert_eq!(error.to_string(), "invalid grade 7, expected 0 to 5");
    }

    #[test]
    fn display_window_not_found() {
        let error = DrillError::WindowNotFound {
            chapter: 2,
            index: 4,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "window 4 does not exist in chapter 2 (3 windows)"
        );
    }

    #[test]
    fn settings_error_converts_from_json() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: DrillError = json_error.into();
        assert!(matches!(error, DrillError::Settings(_)));
    }
}

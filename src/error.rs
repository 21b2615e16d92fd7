//! Error handling module for matchtui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All recoverable conditions in the selection store surface as one of these
//! variants; none of them is fatal to the process.

use thiserror::Error;

/// Main error type for matchtui
#[derive(Error, Debug)]
pub enum MatchTuiError {
    /// A match set or row identifier that does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// A staged value that is not in the row's allowed options
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// An edit operation invoked outside the editor lifecycle
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Match-set file errors (loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for matchtui operations
pub type Result<T> = std::result::Result<T, MatchTuiError>;

// Convenient error constructors
impl MatchTuiError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-selection error
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    /// Create a precondition-failed error
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }

    /// Whether the error leaves the caller free to retry with corrected input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidSelection(_) | Self::PreconditionFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchTuiError::not_found("match set 'Orphans'");
        assert_eq!(err.to_string(), "not found: match set 'Orphans'");

        let err = MatchTuiError::invalid_selection("'Target Z' is not an option");
        assert_eq!(
            err.to_string(),
            "invalid selection: 'Target Z' is not an option"
        );

        let err = MatchTuiError::precondition("no editor open");
        assert_eq!(err.to_string(), "precondition failed: no editor open");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MatchTuiError = io_err.into();
        assert!(matches!(err, MatchTuiError::Io(_)));
    }

    #[test]
    fn test_store_errors_are_recoverable() {
        assert!(MatchTuiError::not_found("x").is_recoverable());
        assert!(MatchTuiError::invalid_selection("x").is_recoverable());
        assert!(MatchTuiError::precondition("x").is_recoverable());
        assert!(!MatchTuiError::terminal("x").is_recoverable());
    }
}

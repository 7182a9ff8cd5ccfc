//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A non-positive amount was supplied when recording an expense
    #[error("Amount must be positive (got {0})")]
    InvalidAmount(Money),

    /// Aggregation was requested but no expenses have been recorded
    #[error("No expenses to visualize.")]
    EmptyDataset,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is the empty-dataset error
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, Self::EmptyDataset)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_display() {
        let err = TrackerError::InvalidAmount(Money::from_cents(-300));
        assert_eq!(err.to_string(), "Amount must be positive (got -$3.00)");
        assert!(err.is_validation());
        assert!(!err.is_empty_dataset());
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = TrackerError::EmptyDataset;
        assert_eq!(err.to_string(), "No expenses to visualize.");
        assert!(err.is_empty_dataset());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_config_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}

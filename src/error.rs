//! Error types for qaddly operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.

use std::fmt;

/// Errors that can occur during qaddly operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaddlyError {
    /// An input did not contain the expected number of lanes.
    InvalidInputLength {
        /// The lane count the operation requires.
        expected: usize,
        /// The lane count the caller provided.
        actual: usize,
    },
}

impl fmt::Display for QaddlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QaddlyError::InvalidInputLength { expected, actual } => write!(
                f,
                "Invalid input length: expected exactly {} lanes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for QaddlyError {}

/// Result type alias for qaddly operations.
pub type Result<T> = std::result::Result<T, QaddlyError>;

/// Creates an invalid-input-length error.
pub fn invalid_input_length(expected: usize, actual: usize) -> QaddlyError {
    QaddlyError::InvalidInputLength { expected, actual }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_length_display() {
        let error = invalid_input_length(8, 7);
        let display = format!("{}", error);
        assert!(display.contains("Invalid input length"));
        assert!(display.contains("expected exactly 8 lanes"));
        assert!(display.contains("got 7"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = invalid_input_length(8, 7);
        let error2 = invalid_input_length(8, 7);
        let error3 = invalid_input_length(8, 9);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_input_length(8, 0);

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        // Should have source method (returns None for our simple errors)
        assert!(std::error::Error::source(&error).is_none());
    }
}

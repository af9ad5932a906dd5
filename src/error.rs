//! Error types for the idea validator.
//!
//! Two failure classes exist. A [`ValidationError`] is raised per request when
//! the submitted idea carries no text and is meant to be shown to the user.
//! A [`ConfigurationError`] is raised only while the classifier and knowledge
//! base are being built at startup and is fatal.
//!
//! Both are wrapped by [`ValidatorError`], which also absorbs I/O and JSON
//! errors from the command line surface.
//!
//! # Examples
//!
//! ```
//! use idea_validator::error::{ValidationError, ValidatorError};
//!
//! let err: ValidatorError = ValidationError::EmptyInput.into();
//! assert_eq!(
//!     err.to_string(),
//!     "Validation error: Please enter a startup idea to validate."
//! );
//! ```

use std::io;

use thiserror::Error;

use crate::ml::sector_classifier::SectorLabel;

/// Request-scoped input errors, recovered at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The idea text was empty or whitespace only.
    #[error("Please enter a startup idea to validate.")]
    EmptyInput,
}

/// Startup errors raised while training the classifier or loading knowledge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No training examples were supplied.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// A sector has no training examples, so its prior would be zero.
    #[error("sector {0} has no training examples")]
    LabelWithoutExamples(SectorLabel),

    /// A sector has no market trend or challenge text.
    #[error("sector {0} has no knowledge base entry")]
    LabelWithoutKnowledge(SectorLabel),
}

/// The main error type for idea validator operations.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Invalid user input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Broken startup configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ValidatorError.
pub type Result<T> = std::result::Result<T, ValidatorError>;

impl ValidatorError {
    /// Whether this error came from user input rather than the process setup.
    pub fn is_validation(&self) -> bool {
        matches!(self, ValidatorError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ValidatorError::from(ConfigurationError::EmptyTrainingSet);
        assert_eq!(
            error.to_string(),
            "Configuration error: training set is empty"
        );

        let error = ValidatorError::from(ConfigurationError::LabelWithoutExamples(
            SectorLabel::Fintech,
        ));
        assert_eq!(
            error.to_string(),
            "Configuration error: sector Fintech has no training examples"
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn test_validation_error_conversion() {
        let error = ValidatorError::from(ValidationError::EmptyInput);
        assert!(error.is_validation());
        match error {
            ValidatorError::Validation(ValidationError::EmptyInput) => {}
            _ => panic!("Expected validation error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ValidatorError::from(io_error);

        match error {
            ValidatorError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}

//! Error types for diabetes-risk-core.
//!
//! This module defines the central error type [`CoreError`] used by the
//! scoring pipeline, along with the [`CoreResult<T>`] type alias. Startup
//! artifact failures have their own type, [`crate::artifacts::ArtifactError`],
//! since they are fatal and never reach request handling.
//!
//! # Examples
//!
//! ```rust
//! use diabetes_risk_core::CoreError;
//!
//! let error = CoreError::MissingField { field: "glucose" };
//! assert!(error.to_string().contains("glucose"));
//! assert!(error.is_input_error());
//! ```

use thiserror::Error;

/// Errors raised while scoring a single request.
///
/// Input errors are request-local: they are reported to the caller for
/// that request and never affect other requests or the loaded artifacts.
/// `DegenerateScale` is different in kind: it means the artifact pair
/// itself is bad and every request will fail the same way.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required input field was absent.
    ///
    /// # When This Occurs
    ///
    /// - The request body omits one of the eight clinical markers
    /// - The request body is not a JSON object at all
    ///
    /// No default is ever substituted for a missing field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A field was present but not representable as a finite real number.
    ///
    /// # When This Occurs
    ///
    /// - The value is a string, boolean, array, object, or null
    /// - The value cannot be represented as a finite `f64`
    #[error("Field '{field}' is not a finite number")]
    NonNumericField {
        /// Name of the offending field
        field: &'static str,
    },

    /// Zero-variance feature in the standardization parameters.
    ///
    /// `Constraint: scale[i] > 0 for all i < FEATURE_COUNT`
    ///
    /// A zero scale is a data/training defect, not a runtime condition to
    /// tolerate: dividing through it would silently turn the feature into
    /// an infinity. Surfaced loudly because it indicates a corrupted or
    /// mismatched artifact pair.
    #[error(
        "Degenerate scale for feature {index} ({name}): expected scale > 0, got {scale}"
    )]
    DegenerateScale {
        /// Feature index in fit order (< [`crate::types::FEATURE_COUNT`])
        index: usize,
        /// Feature name at that index
        name: &'static str,
        /// The offending scale value
        scale: f64,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// True for errors caused by the request payload rather than the
    /// service. The boundary maps these to client-error statuses; anything
    /// else is a server-side failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField { .. } | CoreError::NonNumericField { .. }
        )
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

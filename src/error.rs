//! Error types for the HR rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while applying hiring and
//! performance rules.

use thiserror::Error;

/// The main error type for the HR rules engine.
///
/// Every rule and service operation returns this error type. None of the
/// variants is retried internally; each one aborts the request before any
/// record is saved.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     matricule: "C00042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: C00042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or is incomplete.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No salary coefficient is configured for the education level.
    #[error("Education coefficient not found: {level}")]
    EducationCoefficientNotFound {
        /// The education level that has no coefficient.
        level: String,
    },

    /// An input was missing or malformed.
    #[error("Validation failed: {message}")]
    Validation {
        /// A human-readable cause.
        message: String,
    },

    /// No employee holds the requested matricule.
    #[error("Employee not found: {matricule}")]
    EmployeeNotFound {
        /// The matricule that did not resolve.
        matricule: String,
    },

    /// The matricule sequence has reached its ceiling.
    #[error("Matricule limit reached: sequence {sequence} reaches the {ceiling} ceiling")]
    MatriculeExhausted {
        /// The sequence number that would have been issued.
        sequence: u32,
        /// The exclusive upper bound of the sequence.
        ceiling: u32,
    },

    /// The freshly allocated matricule is already held by an employee.
    #[error("Employee with matricule {matricule} already exists")]
    DuplicateMatricule {
        /// The colliding matricule.
        matricule: String,
    },

    /// A stored matricule or suffix does not follow the expected format.
    #[error("Invalid matricule '{value}': {message}")]
    InvalidMatricule {
        /// The offending value.
        value: String,
        /// A description of what is wrong with it.
        message: String,
    },

    /// The employee store failed to answer a query or save a record.
    #[error("Repository error during {operation}: {message}")]
    Repository {
        /// The store operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Creates a validation error from a human-readable cause.
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/company.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/company.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/education.yaml".to_string(),
            message: "missing coefficient for education level 'master'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/education.yaml': missing coefficient for education level 'master'"
        );
    }

    #[test]
    fn test_education_coefficient_not_found_displays_level() {
        let error = EngineError::EducationCoefficientNotFound {
            level: "doctorate".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Education coefficient not found: doctorate"
        );
    }

    #[test]
    fn test_validation_displays_message() {
        let error = EngineError::validation("revenue target must not be negative");
        assert_eq!(
            error.to_string(),
            "Validation failed: revenue target must not be negative"
        );
    }

    #[test]
    fn test_matricule_exhausted_displays_sequence_and_ceiling() {
        let error = EngineError::MatriculeExhausted {
            sequence: 100000,
            ceiling: 100000,
        };
        assert_eq!(
            error.to_string(),
            "Matricule limit reached: sequence 100000 reaches the 100000 ceiling"
        );
    }

    #[test]
    fn test_duplicate_matricule_displays_matricule() {
        let error = EngineError::DuplicateMatricule {
            matricule: "M00012".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee with matricule M00012 already exists"
        );
    }

    #[test]
    fn test_repository_error_displays_operation() {
        let error = EngineError::Repository {
            operation: "save".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Repository error during save: connection reset"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                matricule: "C00001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }
}

//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payroll settings field was out of range or inconsistent.
    #[error("Invalid payroll settings field '{field}': {message}")]
    InvalidSettings {
        /// The settings field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The statutory tax table was malformed.
    #[error("Invalid tax table field '{field}': {message}")]
    InvalidTaxTable {
        /// The tax table field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the employee roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while building or mutating records.

use thiserror::Error;

use crate::models::Role;

/// The main error type for the employee roster.
///
/// # Example
///
/// ```
/// use employee_roster::error::RosterError;
///
/// let error = RosterError::InvalidEmployee {
///     field: "name".to_string(),
///     message: "must contain at least one word".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid employee field 'name': must contain at least one word"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// An employee could not be constructed from the supplied fields.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A variant-specific operation was called on a record of another variant.
    #[error("Cannot {operation} on {role:?} record")]
    VariantMismatch {
        /// The operation that was attempted.
        operation: String,
        /// The role of the record it was attempted on.
        role: Role,
    },

    /// A pay calculation produced a value that cannot be stored.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

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

    /// Configuration parsed but holds a value the roster cannot work with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

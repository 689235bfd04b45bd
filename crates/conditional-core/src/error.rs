//! Error types for conditional periods and collections

use thiserror::Error;

/// Core error type
///
/// Every validation failure is reported at the point of invalid input and
/// names the argument and the constraint that was violated.
#[derive(Error, Debug)]
pub enum PeriodError {
    /// Type tag is not one of `C` / `D`
    #[error("Invalid type: must be 'C' (category) or 'D' (duration), got '{0}'")]
    InvalidType(String),

    /// Lower bound has the wrong variant, is not a positive category or is not a duration
    #[error("Invalid lower bound: {0}")]
    InvalidLowerBound(String),

    /// Upper bound has the wrong variant, is negative or is not a duration
    #[error("Invalid upper bound: {0}")]
    InvalidUpperBound(String),

    /// Upper bound is below the lower bound (and is not the unbounded sentinel)
    #[error("Invalid bound order: upper must be greater than or equal to lower, or 0. lower was ({lower}) and upper was ({upper})")]
    InvalidBoundOrder { lower: String, upper: String },

    /// Result is not a duration
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// Value given to `matches` has the wrong variant or cannot be parsed
    #[error("Invalid match value: {0}")]
    InvalidMatchValue(String),

    /// Value given to `find` has the wrong variant or cannot be parsed
    #[error("Invalid search value: {0}")]
    InvalidSearchValue(String),

    /// Period type differs from the type already stored in a collection
    #[error("Type mismatch: collection holds {expected} periods, got {given}")]
    TypeMismatch { expected: String, given: String },

    /// Grammar scan could not locate a bound argument
    #[error("Invalid string format: can't find argument #{position}. Given: {input}")]
    MissingArgument { position: usize, input: String },

    /// Grammar scan reached the end of input before the result
    #[error("Invalid string format: can't find result. Given: {input}")]
    UnterminatedFormat { input: String },

    /// Registry table not found
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding/decoding error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for period operations
pub type Result<T> = std::result::Result<T, PeriodError>;

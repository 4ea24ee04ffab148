//! Error types for the statement layer

use thiserror::Error;

/// Result type alias for statement operations
pub type StatementResult<T> = Result<T, StatementError>;

/// Errors that can occur while injecting or executing a search
#[derive(Error, Debug)]
pub enum StatementError {
    /// Marker was empty or contained non-identifier characters
    #[error("invalid statement marker `{0}`")]
    InvalidMarker(String),

    /// The statement contains no occurrence of the marker
    #[error("statement marker `{0}` not found")]
    MarkerNotFound(String),

    /// The statement references a placeholder the search never bound
    #[error("no value bound for placeholder `{0}`")]
    UnboundPlaceholder(String),

    /// A bound value was not a scalar
    #[error("cannot bind non-scalar value at position {0}")]
    NonScalarBinding(usize),

    /// Condition compilation failed
    #[error(transparent)]
    Compile(#[from] flexsearch_compiler::CompileError),

    /// Substitution pattern failed to build
    #[error("marker pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

//! Compiler error types

use thiserror::Error;

/// Compile error
///
/// Every variant is a programmer error in the condition input; compilation
/// fails fast and never returns a partial clause.
#[derive(Error, Debug)]
pub enum CompileError {
    /// Both condition groups were empty
    #[error("search requires at least one condition")]
    NoConditions,

    /// A resolved column name was empty
    #[error("column must not be empty")]
    EmptyColumn,

    /// A column key resolved to zero values
    #[error("operator generation requires at least one value")]
    NoValues,

    /// A value was neither NULL nor a scalar
    #[error("value must be NULL or a scalar value")]
    UnsupportedValue,

    /// A value trimmed to an empty string
    #[error("value must not be empty")]
    BlankValue,

    /// A token matched neither registry table
    #[error("use of unknown search token `{0}`")]
    UnknownToken(String),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

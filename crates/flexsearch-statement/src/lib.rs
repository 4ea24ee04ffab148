//! FLEXSEARCH Statement - runs compiled searches against a database
//!
//! Consumes [`CompiledSearch`] output: injects the WHERE clause into a
//! caller-supplied statement at a named marker, binds every placeholder and
//! executes the result on an SQLite pool.
//!
//! [`CompiledSearch`]: flexsearch_compiler::CompiledSearch

pub mod error;
pub mod executor;
pub mod inject;

// Re-export main types
pub use error::{StatementError, StatementResult};
pub use executor::{PreparedSearch, SearchPool};
pub use inject::inject_clause;

//! FLEXSEARCH Compiler - compiles condition groups into SQL WHERE clauses
//!
//! The compiler takes two ordered condition groups (AND and OR), each mapping
//! a column spec string to one or more values, and produces a parameterized
//! WHERE clause plus the placeholder bindings to execute it with.

pub mod allocator;
pub mod clause;
pub mod compiler;
pub mod config;
pub mod error;

// Re-export main types
pub use allocator::{PlaceholderAllocator, PARAMETER_MARKER, PLACEHOLDER_PREFIX};
pub use clause::{between, operator};
pub use compiler::{CompiledSearch, Conditions, SearchCompiler};
pub use config::SearchConfig;
pub use error::{CompileError, Result};

//! Placeholder allocation
//!
//! One allocator lives for exactly one compile call. It hands out uniquely
//! numbered placeholder names, records their bindings in first-seen order,
//! and validates values on the way in.

use flexsearch_core::Value;
use indexmap::IndexMap;

use crate::error::{CompileError, Result};

/// Prefix for generated placeholder names
pub const PLACEHOLDER_PREFIX: &str = "flexsearch";

/// Marker prepended to a placeholder name to form its statement reference
pub const PARAMETER_MARKER: char = ':';

/// Issues placeholder names and records their bound values.
///
/// The counter is shared across the whole compile call and never resets
/// between columns or condition groups, so names stay unique.
#[derive(Debug, Default)]
pub struct PlaceholderAllocator {
    count: usize,
    bindings: IndexMap<String, Value>,
}

impl PlaceholderAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a value and turn it into clause text.
    ///
    /// NULL becomes the literal `NULL` without a binding. Booleans are
    /// coerced to integer 0/1 before binding. Everything else must be a
    /// non-blank scalar and gets a fresh placeholder; the returned text is
    /// the `:`-prefixed reference for use in the clause.
    pub fn bind(&mut self, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(flag) => Ok(self.allocate(Value::Number(if *flag { 1.0 } else { 0.0 }))),
            Value::Number(_) => Ok(self.allocate(value.clone())),
            Value::String(text) => {
                if text.trim().is_empty() {
                    Err(CompileError::BlankValue)
                } else {
                    Ok(self.allocate(value.clone()))
                }
            }
            Value::Array(_) | Value::Object(_) => Err(CompileError::UnsupportedValue),
        }
    }

    fn allocate(&mut self, value: Value) -> String {
        let name = format!("{PLACEHOLDER_PREFIX}{}", self.count);
        self.count += 1;
        self.bindings.insert(name.clone(), value);
        format!("{PARAMETER_MARKER}{name}")
    }

    /// Number of allocated placeholders
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing has been allocated yet
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Consume the allocator, yielding the ordered bindings
    pub fn into_bindings(self) -> IndexMap<String, Value> {
        self.bindings
    }
}

//! Compiler configuration

use flexsearch_core::TokenTable;
use serde::{Deserialize, Serialize};

/// Search compiler configuration
///
/// Everything here is overridable per compiler instance; the defaults match
/// the canonical grammar (`E/col;!E/col2` style specs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Separates multiple column specs within one key
    pub column_separator: String,

    /// Separates the search token from the column name
    pub token_separator: String,

    /// Substituted when a spec carries no token
    pub default_token: String,

    /// The search-token registry
    pub tokens: TokenTable,
}

impl SearchConfig {
    /// Create a configuration with the default grammar
    pub fn new() -> Self {
        Self {
            column_separator: ";".to_string(),
            token_separator: "/".to_string(),
            default_token: "E".to_string(),
            tokens: TokenTable::default(),
        }
    }

    /// Set the column separator
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    /// Set the token separator
    pub fn with_token_separator(mut self, separator: impl Into<String>) -> Self {
        self.token_separator = separator.into();
        self
    }

    /// Set the default token
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.default_token = token.into();
        self
    }

    /// Replace the token registry
    pub fn with_tokens(mut self, tokens: TokenTable) -> Self {
        self.tokens = tokens;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! The search compiler
//!
//! Turns two condition groups into one WHERE clause. Within a group every
//! column key contributes one parenthesized fragment; fragments are joined
//! with the group's glue word (AND or OR). The first group's text starts the
//! clause verbatim, every later group is appended as `AND ( ... )` - the two
//! groups are independently evaluated filters combined by AND.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use flexsearch_core::{
    column::{merge_column_specs, parse_column_string},
    flatten, ColumnSpec, TokenAction, Value,
};

use crate::allocator::PlaceholderAllocator;
use crate::clause::{between, operator};
use crate::config::SearchConfig;
use crate::error::{CompileError, Result};

/// An ordered condition group: column spec string to value(s)
pub type Conditions = IndexMap<String, Value>;

/// The output of one compile call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledSearch {
    /// Placeholder name to bound value, in first-seen order
    pub placeholders: IndexMap<String, Value>,
    /// The assembled WHERE clause text
    pub where_clause: String,
}

/// Compiles condition groups into parameterized WHERE clauses.
///
/// The compiler itself is immutable configuration; every [`compile`] call
/// owns its own placeholder state, so one instance is safe to share across
/// threads.
///
/// [`compile`]: SearchCompiler::compile
#[derive(Debug, Clone, Default)]
pub struct SearchCompiler {
    config: SearchConfig,
}

impl SearchCompiler {
    /// Create a compiler with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with a custom configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Parse a compound column spec string using the configured separators
    pub fn parse_column_spec(&self, spec: &str) -> Vec<ColumnSpec> {
        parse_column_string(
            spec,
            &self.config.column_separator,
            &self.config.token_separator,
        )
    }

    /// Merge parsed specs back into a string using the configured separators
    pub fn merge_column_spec(&self, specs: &[ColumnSpec]) -> String {
        merge_column_specs(
            specs,
            &self.config.column_separator,
            &self.config.token_separator,
        )
    }

    /// Compile the AND and OR condition groups into a WHERE clause.
    ///
    /// Fails when both groups are empty, and on the first invalid column
    /// spec, token or value; no partial output is ever returned.
    pub fn compile(&self, and: &Conditions, or: &Conditions) -> Result<CompiledSearch> {
        if and.is_empty() && or.is_empty() {
            return Err(CompileError::NoConditions);
        }

        let mut allocator = PlaceholderAllocator::new();
        let mut where_clause = String::new();

        for (glue, entries) in [("AND", and), ("OR", or)] {
            if entries.is_empty() {
                continue;
            }

            let mut fragments = Vec::with_capacity(entries.len());
            for (column_key, values) in entries {
                fragments.push(self.compile_column(column_key, values, &mut allocator)?);
            }

            let joined = fragments.join(&format!("\n{glue} "));
            if where_clause.is_empty() {
                where_clause = joined;
            } else {
                where_clause.push_str(&format!("\nAND ( {joined} )"));
            }
        }

        debug!(
            placeholders = allocator.len(),
            clause_bytes = where_clause.len(),
            "compiled search clause"
        );

        Ok(CompiledSearch {
            placeholders: allocator.into_bindings(),
            where_clause,
        })
    }

    /// Compile one column key into its parenthesized fragment.
    ///
    /// A compound key (several specs sharing one value set) OR-joins the
    /// per-spec conditions; the whole set is wrapped in parentheses once.
    fn compile_column(
        &self,
        column_key: &str,
        values: &Value,
        allocator: &mut PlaceholderAllocator,
    ) -> Result<String> {
        let references = flatten(values)
            .iter()
            .map(|value| allocator.bind(value))
            .collect::<Result<Vec<_>>>()?;

        let mut group = Vec::new();
        for spec in self.parse_column_spec(column_key) {
            let token = if spec.token.is_empty() {
                self.config.default_token.as_str()
            } else {
                spec.token.as_str()
            };

            let fragment = match self.config.tokens.resolve(token) {
                Some(TokenAction::Compare(symbol)) => operator(&spec.column, &references, symbol)?,
                Some(TokenAction::Range(range)) => between(&spec.column, &references, range)?,
                None => return Err(CompileError::UnknownToken(token.to_string())),
            };
            group.push(fragment);
        }

        Ok(format!("({})", group.join(" OR ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(entries: &[(&str, Value)]) -> Conditions {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_compile_requires_a_condition() {
        let compiler = SearchCompiler::new();
        assert!(matches!(
            compiler.compile(&Conditions::new(), &Conditions::new()),
            Err(CompileError::NoConditions)
        ));
    }

    #[test]
    fn test_unknown_token_carries_the_literal() {
        let compiler = SearchCompiler::new();
        let error = compiler
            .compile(&conditions(&[("UN/col", Value::from("val"))]), &Conditions::new())
            .unwrap_err();
        assert_eq!(error.to_string(), "use of unknown search token `UN`");
    }

    #[test]
    fn test_compound_spec_reuses_placeholders() {
        let compiler = SearchCompiler::new();
        let search = compiler
            .compile(
                &conditions(&[("E/col;!E/col2", Value::from("val"))]),
                &Conditions::new(),
            )
            .unwrap();

        assert_eq!(
            search.where_clause,
            "(col = :flexsearch0 OR col2 != :flexsearch0)"
        );
        assert_eq!(search.placeholders.len(), 1);
    }

    #[test]
    fn test_null_value_compiles_to_literal() {
        let compiler = SearchCompiler::new();
        let search = compiler
            .compile(&conditions(&[("IS/col", Value::Null)]), &Conditions::new())
            .unwrap();

        assert_eq!(search.where_clause, "(col IS NULL)");
        assert!(search.placeholders.is_empty());
    }

    #[test]
    fn test_custom_grammar() {
        let compiler = SearchCompiler::with_config(
            SearchConfig::new()
                .with_column_separator("|")
                .with_token_separator(":"),
        );
        let search = compiler
            .compile(
                &conditions(&[("GT:col|col2", Value::from(3i64))]),
                &Conditions::new(),
            )
            .unwrap();

        assert_eq!(
            search.where_clause,
            "(col > :flexsearch0 OR col2 = :flexsearch0)"
        );
    }
}

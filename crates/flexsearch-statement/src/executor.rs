//! Search execution
//!
//! [`SearchPool`] pairs an SQLite connection pool with a [`SearchCompiler`];
//! [`PreparedSearch`] holds one compiled search and runs it against any
//! statement carrying the marker.

use regex::{Captures, Regex};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteRow};
use tracing::trace;

use flexsearch_compiler::{
    CompiledSearch, Conditions, SearchCompiler, PARAMETER_MARKER, PLACEHOLDER_PREFIX,
};
use flexsearch_core::Value;

use crate::error::{StatementError, StatementResult};
use crate::inject::inject_clause;

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A connection pool that can run flexible searches.
pub struct SearchPool {
    pool: SqlitePool,
    compiler: SearchCompiler,
}

impl SearchPool {
    /// Wrap a pool with the default compiler configuration
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            compiler: SearchCompiler::new(),
        }
    }

    /// Wrap a pool with a custom compiler
    pub fn with_compiler(pool: SqlitePool, compiler: SearchCompiler) -> Self {
        Self { pool, compiler }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Compile the given condition groups into a search bound to `marker`.
    ///
    /// The marker may carry its leading `:`. Compilation happens eagerly, so
    /// invalid conditions fail here rather than at execution time.
    pub fn search(
        &self,
        marker: &str,
        and: &Conditions,
        or: &Conditions,
    ) -> StatementResult<PreparedSearch<'_>> {
        let search = self.compiler.compile(and, or)?;
        Ok(PreparedSearch {
            pool: &self.pool,
            marker: marker.to_string(),
            search,
        })
    }
}

/// One compiled search, ready to run against statements.
pub struct PreparedSearch<'a> {
    pool: &'a SqlitePool,
    marker: String,
    search: CompiledSearch,
}

impl PreparedSearch<'_> {
    /// The compiled search carried by this statement
    pub fn compiled(&self) -> &CompiledSearch {
        &self.search
    }

    /// Inject the clause into `statement` and rewrite placeholder
    /// references to positional binds.
    ///
    /// Returns the rewritten SQL and the values to bind, in occurrence
    /// order; a reference appearing more than once re-binds its value.
    /// Named parameters other than the search's own pass through untouched.
    pub fn render(&self, statement: &str) -> StatementResult<(String, Vec<Value>)> {
        let injected = inject_clause(statement, &self.marker, &self.search.where_clause)?;

        let pattern = Regex::new(&format!(r"{PARAMETER_MARKER}({PLACEHOLDER_PREFIX}\d+)\b"))?;
        let mut values = Vec::new();
        let mut unbound = None;
        let sql = pattern
            .replace_all(&injected, |caps: &Captures| {
                match self.search.placeholders.get(&caps[1]) {
                    Some(value) => {
                        values.push(value.clone());
                        "?".to_string()
                    }
                    None => {
                        unbound.get_or_insert_with(|| caps[1].to_string());
                        caps[0].to_string()
                    }
                }
            })
            .into_owned();

        if let Some(name) = unbound {
            return Err(StatementError::UnboundPlaceholder(name));
        }

        trace!(binds = values.len(), "rendered search statement");
        Ok((sql, values))
    }

    /// Run the statement and fetch every row
    pub async fn fetch_all(&self, statement: &str) -> StatementResult<Vec<SqliteRow>> {
        let (sql, values) = self.render(statement)?;
        let query = bind_values(sqlx::query(&sql), &values)?;
        Ok(query.fetch_all(self.pool).await?)
    }

    /// Run the statement and return the number of affected rows
    pub async fn execute(&self, statement: &str) -> StatementResult<u64> {
        let (sql, values) = self.render(statement)?;
        let query = bind_values(sqlx::query(&sql), &values)?;
        Ok(query.execute(self.pool).await?.rows_affected())
    }
}

/// Bind compiled values onto a query in order.
///
/// Integral numbers bind as i64 so integer-keyed filters compare the way
/// callers expect in SQLite.
fn bind_values<'q>(
    mut query: SqliteQuery<'q>,
    values: &'q [Value],
) -> StatementResult<SqliteQuery<'q>> {
    for (position, value) in values.iter().enumerate() {
        query = match value {
            Value::Null => query.bind(None::<String>),
            Value::Bool(flag) => query.bind(*flag as i64),
            Value::Number(number) if number.fract() == 0.0 => query.bind(*number as i64),
            Value::Number(number) => query.bind(*number),
            Value::String(text) => query.bind(text.as_str()),
            Value::Array(_) | Value::Object(_) => {
                return Err(StatementError::NonScalarBinding(position))
            }
        };
    }
    Ok(query)
}

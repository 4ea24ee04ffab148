//! Column-spec parsing
//!
//! A column spec encodes an optional search token and a column name, e.g.
//! `GT/amount`. Several specs can share one value set by joining them with
//! the column separator: `E/col;!E/col2`.

/// One parsed column spec: a search token (possibly empty) and a column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// The search token, empty when the spec carries none
    pub token: String,
    /// The column name
    pub column: String,
}

impl ColumnSpec {
    /// Create a new column spec
    pub fn new(token: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            column: column.into(),
        }
    }
}

/// Split a compound column string into its specs.
///
/// Each segment is split on the token separator: a single part means no
/// token; with two or more parts the token is the first part and the column
/// the last. Middle parts are discarded - a column name accidentally
/// containing the token separator twice silently loses data.
pub fn parse_column_string(
    input: &str,
    column_separator: &str,
    token_separator: &str,
) -> Vec<ColumnSpec> {
    input
        .split(column_separator)
        .map(|segment| {
            let parts: Vec<&str> = segment.split(token_separator).collect();
            if parts.len() == 1 {
                ColumnSpec::new("", parts[0])
            } else {
                ColumnSpec::new(parts[0], parts[parts.len() - 1])
            }
        })
        .collect()
}

/// Merge parsed specs back into a compound column string.
///
/// Inverse of [`parse_column_string`] as long as tokens and columns contain
/// neither separator; empty fields are omitted.
pub fn merge_column_specs(
    specs: &[ColumnSpec],
    column_separator: &str,
    token_separator: &str,
) -> String {
    specs
        .iter()
        .map(|spec| {
            let mut parts = Vec::new();
            if !spec.token.is_empty() {
                parts.push(spec.token.as_str());
            }
            if !spec.column.is_empty() {
                parts.push(spec.column.as_str());
            }
            parts.join(token_separator)
        })
        .collect::<Vec<_>>()
        .join(column_separator)
}

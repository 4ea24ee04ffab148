//! Clause fragment generation
//!
//! Builds the `column OP value` fragments a compiled clause is assembled
//! from. Values arriving here are already clause text: placeholder
//! references or the literal `NULL` produced at allocation time.

use flexsearch_core::RangeOp;

use crate::error::{CompileError, Result};

/// Generate an OR-joined comparison for one column.
///
/// One fragment per value, in input order: `col = :p0 OR col = :p1`.
/// OR-joining lets a single token match any of several values without
/// reaching for `IN`, which keeps negated tokens symmetric.
pub fn operator(column: &str, values: &[String], symbol: &str) -> Result<String> {
    if column.is_empty() {
        return Err(CompileError::EmptyColumn);
    }
    if values.is_empty() {
        return Err(CompileError::NoValues);
    }

    let mut fragments = Vec::with_capacity(values.len());
    for value in values {
        if value.trim().is_empty() {
            return Err(CompileError::BlankValue);
        }
        fragments.push(format!("{column} {symbol} {value}"));
    }

    Ok(fragments.join(" OR "))
}

/// Generate a range condition for one column.
///
/// Values are consumed pairwise into `lo AND hi` bounds, so four values
/// yield `col BETWEEN :p0 AND :p1 OR col BETWEEN :p2 AND :p3`. Works only
/// with values in even pairs; a trailing unpaired value is silently dropped.
pub fn between(column: &str, values: &[String], range: RangeOp) -> Result<String> {
    let paired: Vec<String> = values
        .chunks_exact(2)
        .map(|pair| format!("{} AND {}", pair[0], pair[1]))
        .collect();

    operator(column, &paired, range.keyword())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_operator_single_value() {
        assert_eq!(operator("col", &refs(&["val"]), "=").unwrap(), "col = val");
    }

    #[test]
    fn test_operator_multiple_values_in_order() {
        assert_eq!(
            operator("col", &refs(&["val", "val2"]), "=").unwrap(),
            "col = val OR col = val2"
        );
    }

    #[test]
    fn test_operator_with_empty_column_fails() {
        assert!(matches!(
            operator("", &refs(&["val"]), "="),
            Err(CompileError::EmptyColumn)
        ));
    }

    #[test]
    fn test_operator_without_values_fails() {
        assert!(matches!(
            operator("col", &[], "="),
            Err(CompileError::NoValues)
        ));
    }

    #[test]
    fn test_operator_with_blank_value_fails() {
        assert!(matches!(
            operator("col", &refs(&[" "]), "="),
            Err(CompileError::BlankValue)
        ));
    }

    #[test]
    fn test_between_pairs_values() {
        assert_eq!(
            between("col", &refs(&[":p0", ":p1"]), RangeOp::Between).unwrap(),
            "col BETWEEN :p0 AND :p1"
        );
    }

    #[test]
    fn test_between_multiple_pairs() {
        assert_eq!(
            between("col", &refs(&[":p0", ":p1", ":p2", ":p3"]), RangeOp::Between).unwrap(),
            "col BETWEEN :p0 AND :p1 OR col BETWEEN :p2 AND :p3"
        );
    }

    #[test]
    fn test_between_drops_trailing_odd_value() {
        assert_eq!(
            between("col", &refs(&[":p0", ":p1", ":p2"]), RangeOp::Between).unwrap(),
            "col BETWEEN :p0 AND :p1"
        );
    }

    #[test]
    fn test_between_single_value_fails() {
        // one value pairs to nothing, which the operator rejects
        assert!(matches!(
            between("col", &refs(&[":p0"]), RangeOp::Between),
            Err(CompileError::NoValues)
        ));
    }

    #[test]
    fn test_not_between_keyword() {
        assert_eq!(
            between("col", &refs(&[":p0", ":p1"]), RangeOp::NotBetween).unwrap(),
            "col NOT BETWEEN :p0 AND :p1"
        );
    }
}

//! Clause injection
//!
//! Substitutes a compiled WHERE clause into a statement template at a named
//! marker such as `:searchConditions`. The marker only matches at a word
//! boundary, so it never matches as a prefix of a longer identifier.

use regex::{NoExpand, Regex};

use flexsearch_compiler::PARAMETER_MARKER;

use crate::error::{StatementError, StatementResult};

/// Replace every occurrence of `:marker` in `statement` with `clause`.
///
/// The marker may be given with or without its leading `:` and must be a
/// plain identifier. A statement without the marker is an error rather than
/// silently executing unfiltered.
pub fn inject_clause(statement: &str, marker: &str, clause: &str) -> StatementResult<String> {
    let name = marker.trim_start_matches(PARAMETER_MARKER);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(StatementError::InvalidMarker(marker.to_string()));
    }

    let pattern = Regex::new(&format!("{PARAMETER_MARKER}{name}\\b"))?;
    if !pattern.is_match(statement) {
        return Err(StatementError::MarkerNotFound(name.to_string()));
    }

    // NoExpand keeps `$` sequences in the clause literal
    Ok(pattern.replace_all(statement, NoExpand(clause)).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_replaces_marker() {
        let statement = "SELECT id FROM test_table WHERE :search";
        assert_eq!(
            inject_clause(statement, "search", "(id = :flexsearch0)").unwrap(),
            "SELECT id FROM test_table WHERE (id = :flexsearch0)"
        );
    }

    #[test]
    fn test_inject_accepts_leading_colon() {
        assert_eq!(
            inject_clause("WHERE :search", ":search", "(id = 1)").unwrap(),
            "WHERE (id = 1)"
        );
    }

    #[test]
    fn test_inject_replaces_every_occurrence() {
        assert_eq!(
            inject_clause("WHERE :search OR NOT (:search)", "search", "(id = 1)").unwrap(),
            "WHERE (id = 1) OR NOT ((id = 1))"
        );
    }

    #[test]
    fn test_inject_respects_word_boundaries() {
        // `:searchExtra` must not match marker `search`
        let result = inject_clause("WHERE :searchExtra", "search", "(id = 1)");
        assert!(matches!(result, Err(StatementError::MarkerNotFound(_))));
    }

    #[test]
    fn test_inject_missing_marker_fails() {
        let result = inject_clause("SELECT 1", "search", "(id = 1)");
        assert!(matches!(
            result,
            Err(StatementError::MarkerNotFound(ref name)) if name == "search"
        ));
    }

    #[test]
    fn test_inject_invalid_marker_fails() {
        assert!(matches!(
            inject_clause("WHERE :search", "", "(id = 1)"),
            Err(StatementError::InvalidMarker(_))
        ));
        assert!(matches!(
            inject_clause("WHERE :search", "se arch", "(id = 1)"),
            Err(StatementError::InvalidMarker(_))
        ));
    }

    #[test]
    fn test_inject_keeps_dollar_sequences_literal() {
        assert_eq!(
            inject_clause("WHERE :search", "search", "(col = '$1')").unwrap(),
            "WHERE (col = '$1')"
        );
    }
}

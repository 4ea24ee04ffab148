//! Search-token registry
//!
//! Maps search tokens to the SQL they select: either a comparison operator
//! symbol used verbatim, or a range operation that needs its values paired
//! before clause generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Range operations, the tokens that need value processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeOp {
    /// `column BETWEEN lo AND hi`
    Between,
    /// `column NOT BETWEEN lo AND hi`
    NotBetween,
}

impl RangeOp {
    /// The SQL keyword for this range operation
    pub fn keyword(&self) -> &'static str {
        match self {
            RangeOp::Between => "BETWEEN",
            RangeOp::NotBetween => "NOT BETWEEN",
        }
    }
}

/// What a resolved token selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAction<'a> {
    /// A plain comparison with the given operator symbol
    Compare(&'a str),
    /// A range operation over paired values
    Range(RangeOp),
}

/// The token registry: two caller-overridable tables.
///
/// Tokens are case-sensitive literals. Comparison tokens win over range
/// tokens when both tables carry the same symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTable {
    /// Token to SQL comparison operator symbol
    pub comparisons: IndexMap<String, String>,
    /// Token to range operation
    pub ranges: IndexMap<String, RangeOp>,
}

impl TokenTable {
    /// Resolve a token against both tables, comparisons first.
    ///
    /// Returns `None` for unknown tokens; callers decide how to fail.
    pub fn resolve(&self, token: &str) -> Option<TokenAction<'_>> {
        if let Some(symbol) = self.comparisons.get(token) {
            return Some(TokenAction::Compare(symbol));
        }
        self.ranges.get(token).copied().map(TokenAction::Range)
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        let comparisons = [
            ("E", "="),
            ("!E", "!="),
            ("GT", ">"),
            ("!GT", "<="),
            ("GTE", ">="),
            ("!GTE", "<"),
            ("LT", "<"),
            ("!LT", ">="),
            ("LTE", "<="),
            ("!LTE", ">"),
            ("L", "LIKE"),
            ("!L", "NOT LIKE"),
            ("IS", "IS"),
            ("!IS", "IS NOT"),
        ]
        .into_iter()
        .map(|(token, symbol)| (token.to_string(), symbol.to_string()))
        .collect();

        let ranges = [
            ("BT".to_string(), RangeOp::Between),
            ("!BT".to_string(), RangeOp::NotBetween),
        ]
        .into_iter()
        .collect();

        Self {
            comparisons,
            ranges,
        }
    }
}

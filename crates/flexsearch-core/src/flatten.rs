//! Value flattening
//!
//! Condition values may nest arbitrarily (`["a", ["b", ["c"]]]`); clause
//! generation wants one flat, ordered sequence of leaves.

use crate::value::Value;

/// Flatten a value into a depth-first, left-to-right sequence of leaves.
///
/// Arrays are recursed into; every other variant is emitted as-is. A scalar
/// input yields a single-element sequence, an empty array yields nothing.
pub fn flatten(value: &Value) -> Vec<Value> {
    let mut output = Vec::new();
    collect(value, &mut output);
    output
}

fn collect(value: &Value, output: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect(item, output);
            }
        }
        leaf => output.push(leaf.clone()),
    }
}

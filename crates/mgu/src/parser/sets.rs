//! Splitting raw input into expression sets

use crate::error::{MguError, Result};
use crate::unification::ExpressionSet;
use tracing::{info, warn};

/// A line containing this marker opens a new expression set
pub const SET_DELIMITER: char = '#';

/// Split input text into expression sets.
///
/// Every line containing [`SET_DELIMITER`] starts a new set, numbered from 1
/// in input order. Other non-blank lines are added verbatim to the current
/// set; lines before the first delimiter belong to no set and are dropped.
pub fn build_expression_sets(input: &str) -> Result<Vec<ExpressionSet>> {
    let lines: Vec<&str> = input.split('\n').collect();
    if lines.len() < 2 {
        return Err(MguError::TooFewLines);
    }

    let mut sets: Vec<ExpressionSet> = Vec::new();
    for (lineno, line) in lines.into_iter().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.contains(SET_DELIMITER) {
            sets.push(ExpressionSet::new(sets.len() + 1));
        } else if !line.trim().is_empty() {
            match sets.last_mut() {
                Some(set) => set.push(line),
                None => warn!(line = lineno + 1, "expression before first set delimiter skipped"),
            }
        }
    }

    info!(sets = sets.len(), "built expression sets");
    Ok(sets)
}

//! Input parsing: terms, equations and expression sets

pub mod sets;
pub mod terms;

pub use sets::{build_expression_sets, SET_DELIMITER};
pub use terms::{extract_args, find_args, parse_equation, parse_term, ParseError, EQUATION_SEPARATOR};

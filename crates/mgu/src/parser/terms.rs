//! Term and equation parsing
//!
//! Terms are written `?name` (variables) or `symbol(arg,...)` (functional
//! terms, with `symbol()` for constants). Arguments are split at top-level
//! commas only, so nested terms stay whole.

use crate::fol::{is_variable, Term};
use thiserror::Error;

/// Separator between the two sides of an equation
pub const EQUATION_SEPARATOR: char = '=';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty term")]
    EmptyTerm,

    #[error("missing argument list in `{0}`")]
    MissingArguments(String),

    #[error("missing function symbol in `{0}`")]
    MissingSymbol(String),
}

/// Split the inside of an argument list into its top-level arguments.
///
/// Commas inside nested parentheses belong to the current argument and all
/// whitespace is dropped. The last argument is always emitted, so an empty
/// list yields a single empty string.
pub fn extract_args(inner: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for c in inner.chars() {
        match c {
            '(' => {
                current.push(c);
                depth += 1;
            }
            ')' => {
                current.push(c);
                depth -= 1;
            }
            ',' if depth == 0 => args.push(std::mem::take(&mut current)),
            c if c.is_whitespace() => {}
            c => current.push(c),
        }
    }
    args.push(current);
    args
}

/// Arguments of a functional term: everything between its first `(` and its
/// closing `)`.
pub fn find_args(term: &str) -> Vec<String> {
    match term.find('(') {
        Some(open) => {
            let rest = &term[open + 1..];
            extract_args(rest.strip_suffix(')').unwrap_or(rest))
        }
        None => vec![String::new()],
    }
}

/// Parse a single term
pub fn parse_term(text: &str) -> Result<Term, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyTerm);
    }
    if is_variable(text) {
        return Ok(Term::var(text));
    }

    let open = text
        .find('(')
        .filter(|_| text.ends_with(')'))
        .ok_or_else(|| ParseError::MissingArguments(text.to_string()))?;
    let symbol = text[..open].trim();
    if symbol.is_empty() {
        return Err(ParseError::MissingSymbol(text.to_string()));
    }

    let mut raw_args = find_args(text);
    if raw_args.len() == 1 && raw_args[0].is_empty() {
        raw_args.clear();
    }
    let args = raw_args
        .iter()
        .map(|arg| parse_term(arg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Term::func(symbol, args))
}

/// Parse `left = right`, splitting on the first `=`.
///
/// Returns `Ok(None)` for lines without a separator. The sides are returned
/// in their written order.
pub fn parse_equation(line: &str) -> Result<Option<(Term, Term)>, ParseError> {
    let Some((left, right)) = line.split_once(EQUATION_SEPARATOR) else {
        return Ok(None);
    };
    Ok(Some((parse_term(left)?, parse_term(right)?)))
}

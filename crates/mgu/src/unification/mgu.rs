//! Most General Unifier (MGU) search over an expression set

use crate::fol::{Bindings, Term, Variable};
use crate::parser::{parse_equation, ParseError};
use std::fmt;
use tracing::debug;

/// Why an expression set has no unifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Occurs check failed - variable occurs in the term it would be bound to
    OccursCheck,
    /// Function symbols don't match
    DifferentFunctions,
    /// Same function symbol, different number of arguments
    DifferentArities,
    /// An equation side could not be read as a term
    MalformedTerm,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureReason::OccursCheck => "Fails occurs check",
            FailureReason::DifferentFunctions => "Different functions",
            FailureReason::DifferentArities => "Different arities",
            FailureReason::MalformedTerm => "Malformed term",
        };
        f.write_str(text)
    }
}

/// A failure reason together with the terms that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub reason: FailureReason,
    pub details: String,
}

impl Failure {
    fn occurs_check(var: &Variable, term: &Term) -> Self {
        Failure {
            reason: FailureReason::OccursCheck,
            details: format!("{} occurs in {}", var, term),
        }
    }

    fn different_functions(left: &Term, right: &Term) -> Self {
        Failure {
            reason: FailureReason::DifferentFunctions,
            details: format!("{} != {}", head_of(left), head_of(right)),
        }
    }

    fn different_arities(left: &Term, left_count: usize, right: &Term, right_count: usize) -> Self {
        Failure {
            reason: FailureReason::DifferentArities,
            details: format!(
                "{}: {} args ## {}: {} args",
                left, left_count, right, right_count
            ),
        }
    }

    fn malformed(expression: &str, error: &ParseError) -> Self {
        Failure {
            reason: FailureReason::MalformedTerm,
            details: format!("{}: {}", expression.trim(), error),
        }
    }
}

/// Leading character of a term's text, the part compared between functions
fn head_of(term: &Term) -> String {
    let head = match term {
        Term::Variable(v) => v.name.chars().next(),
        Term::Function(f, _) => f.head(),
    };
    head.map(String::from).unwrap_or_default()
}

/// A group of equations solved together.
///
/// Failure is sticky: once `failure` is set it is only ever replaced by a
/// later failure, and bindings made before or after it stay in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionSet {
    pub id: usize,
    pub expressions: Vec<String>,
    pub bindings: Bindings,
    pub failure: Option<Failure>,
}

impl ExpressionSet {
    pub fn new(id: usize) -> Self {
        ExpressionSet {
            id,
            expressions: Vec::new(),
            bindings: Bindings::new(),
            failure: None,
        }
    }

    /// Build a set from equation lines
    pub fn with_expressions<I, S>(id: usize, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpressionSet {
            expressions: expressions.into_iter().map(Into::into).collect(),
            ..ExpressionSet::new(id)
        }
    }

    pub fn push(&mut self, expression: impl Into<String>) {
        self.expressions.push(expression.into());
    }

    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    fn fail(&mut self, failure: Failure) {
        debug!(
            set = self.id,
            reason = %failure.reason,
            details = %failure.details,
            "unification failure"
        );
        self.failure = Some(failure);
    }
}

/// Put a bare variable on the left: `t = ?x` becomes `?x = t`
pub fn canonicalize(left: Term, right: Term) -> (Term, Term) {
    if right.is_variable() && !left.is_variable() {
        (right, left)
    } else {
        (left, right)
    }
}

/// Does the variable's name appear anywhere in the printed term?
///
/// This is textual containment, so `?x` also occurs in `f(?x1)`.
pub fn occurs_in(var: &Variable, term: &Term) -> bool {
    term.to_string().contains(var.name.as_str())
}

/// Solve every equation of the set, in order.
///
/// Earlier failures don't stop later equations from being processed.
pub fn unify(set: &mut ExpressionSet) {
    let expressions = std::mem::take(&mut set.expressions);
    for expression in &expressions {
        match parse_equation(expression) {
            Ok(Some((left, right))) => {
                let (left, right) = canonicalize(left, right);
                bind(set, &left, &right);
            }
            Ok(None) => {}
            Err(e) => set.fail(Failure::malformed(expression, &e)),
        }
    }
    set.expressions = expressions;
}

/// Bind `left` to `right`, recursing into matching functional terms.
///
/// Argument pairs are all attempted even after one of them fails.
pub fn bind(set: &mut ExpressionSet, left: &Term, right: &Term) {
    match left {
        Term::Variable(var) => {
            if occurs_in(var, right) {
                set.fail(Failure::occurs_check(var, right));
            } else {
                debug!(set = set.id, var = %var, term = %right, "bind");
                set.bindings.insert(var.clone(), right.clone());
            }
        }
        Term::Function(f, left_args) => {
            let right_args = match right {
                Term::Function(g, args) if f.head() == g.head() => args,
                _ => {
                    set.fail(Failure::different_functions(left, right));
                    return;
                }
            };
            if left_args.len() != right_args.len() {
                set.fail(Failure::different_arities(
                    left,
                    left_args.len(),
                    right,
                    right_args.len(),
                ));
                return;
            }
            for (l, r) in left_args.iter().zip(right_args) {
                let (l, r) = canonicalize(l.clone(), r.clone());
                bind(set, &l, &r);
            }
        }
    }
}

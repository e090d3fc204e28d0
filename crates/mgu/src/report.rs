//! Text rendering of expression sets and their unification results

use crate::fol::Bindings;
use crate::parser::parse_equation;
use crate::unification::{ExpressionSet, Failure};
use std::fmt;

/// Echo of the parsed input, printed before solving
pub struct SetsDisplay<'a>(pub &'a [ExpressionSet]);

/// Per-set report, in the order given
pub struct ReportDisplay<'a>(pub &'a [ExpressionSet]);

impl fmt::Display for SetsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{} expression sets:", self.0.len())?;
        for set in self.0 {
            writeln!(f, "\nSet {}", set.id)?;
            for expr in &set.expressions {
                writeln!(f, "{}", expr)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in self.0 {
            match &set.failure {
                Some(failure) => write_failure(f, set.id, failure)?,
                None => write_bindings(f, set)?,
            }
        }
        Ok(())
    }
}

pub fn render_sets(sets: &[ExpressionSet]) -> String {
    SetsDisplay(sets).to_string()
}

pub fn render_report(sets: &[ExpressionSet]) -> String {
    ReportDisplay(sets).to_string()
}

fn write_failure(f: &mut fmt::Formatter<'_>, id: usize, failure: &Failure) -> fmt::Result {
    writeln!(f, "\n### No MGU for set {}", id)?;
    writeln!(f, "{}", failure.reason)?;
    writeln!(f, "{}", failure.details)
}

fn write_bindings(f: &mut fmt::Formatter<'_>, set: &ExpressionSet) -> fmt::Result {
    writeln!(f, "\n### MGU for set {}", set.id)?;

    writeln!(f, "\nBindings:")?;
    for (var, term) in set.bindings.iter() {
        writeln!(f, "   {} ==> {}", var, term)?;
    }

    writeln!(f, "\nExpressions:")?;
    for expr in &set.expressions {
        writeln!(f, "   Original:  {}", expr)?;
        writeln!(f, "   Rewritten: {}", rewrite_expression(expr, &set.bindings))?;
        writeln!(f)?;
    }
    Ok(())
}

/// Substitute the bindings into an equation line for display.
///
/// Lines that don't parse as equations come back unchanged.
pub fn rewrite_expression(expression: &str, bindings: &Bindings) -> String {
    match parse_equation(expression) {
        Ok(Some((left, right))) => {
            format!("{} = {}", bindings.rewrite(&left), bindings.rewrite(&right))
        }
        _ => expression.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{Term, Variable};
    use crate::unification::{unify, FailureReason};

    #[test]
    fn test_render_sets() {
        let sets = vec![
            ExpressionSet::with_expressions(1, ["?x = a()"]),
            ExpressionSet::with_expressions(2, ["?y = b()", "?z = c()"]),
        ];
        assert_eq!(
            render_sets(&sets),
            "\n2 expression sets:\n\nSet 1\n?x = a()\n\nSet 2\n?y = b()\n?z = c()\n"
        );
    }

    #[test]
    fn test_render_success() {
        let mut set = ExpressionSet::with_expressions(1, ["f(a()) = ?x", "?w = g(?x)"]);
        unify(&mut set);

        let expected = "\n### MGU for set 1\n\
                        \nBindings:\n\
                        \x20  ?w ==> g(?x)\n\
                        \x20  ?x ==> f(a())\n\
                        \nExpressions:\n\
                        \x20  Original:  f(a()) = ?x\n\
                        \x20  Rewritten: f(a()) = f(a())\n\
                        \n\
                        \x20  Original:  ?w = g(?x)\n\
                        \x20  Rewritten: g(f(a())) = g(f(a()))\n\
                        \n";
        assert_eq!(render_report(&[set]), expected);
    }

    #[test]
    fn test_render_failure() {
        let mut set = ExpressionSet::new(3);
        set.failure = Some(Failure {
            reason: FailureReason::OccursCheck,
            details: "?x occurs in f(?x)".to_string(),
        });
        assert_eq!(
            render_report(&[set]),
            "\n### No MGU for set 3\nFails occurs check\n?x occurs in f(?x)\n"
        );
    }

    #[test]
    fn test_rewrite_two_hops() {
        let mut bindings = Bindings::new();
        bindings.insert(Variable::new("?x"), Term::var("?y"));
        bindings.insert(Variable::new("?y"), Term::constant("a"));

        assert_eq!(rewrite_expression("?x = ?y", &bindings), "a() = a()");
        assert_eq!(rewrite_expression("not an equation", &bindings), "not an equation");
    }
}

//! mgu: most general unifiers for sets of first-order term equations
//!
//! Input is a list of expression sets, each a group of `term = term`
//! equations. Every set is solved on its own thread; the result is either a
//! binding table or the reason no unifier exists.
//!
//! ```text
//! #
//! ?x1 = g(?x2)
//! f(?x1,h(?x1),?x2) = f(g(?x3),?x4,?x3)
//! #
//! ?y = h(a(),b(),c())
//! ```

pub mod config;
pub mod error;
pub mod fol;
pub mod parser;
pub mod report;
pub mod solver;
pub mod unification;

pub use config::{MguConfig, DEFAULT_INPUT_FILE};
pub use error::{MguError, Result};
pub use fol::{Bindings, FunctionSymbol, Term, Variable};
pub use parser::{build_expression_sets, parse_term, ParseError};
pub use report::{render_report, render_sets};
pub use solver::{solve, solve_sequential};
pub use unification::{unify, ExpressionSet, Failure, FailureReason};

/// Output of a complete run: the input echo and the per-set report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub sets: Vec<ExpressionSet>,
    pub echo: String,
    pub report: String,
}

/// Build, solve and render the expression sets found in `input`
pub fn run_str(input: &str, config: &MguConfig) -> Result<RunOutput> {
    let mut sets = build_expression_sets(input)?;
    let echo = render_sets(&sets);
    solver::solve_with_stack(&mut sets, config.stack_size)?;
    let report = solver::with_stack(config.stack_size, || render_report(&sets))?;
    Ok(RunOutput { sets, echo, report })
}

/// Read the configured input file and run it
pub fn run(config: &MguConfig) -> Result<RunOutput> {
    let input = config.read_input()?;
    run_str(&input, config)
}

//! First-order term data structures
//!
//! Terms are parsed once from their textual form into [`Term`] and every later
//! step (occurs check, binding, display rewriting) works on that structure.

pub mod substitution;
pub mod term;

pub use substitution::Bindings;
pub use term::{is_functional_term, is_variable, FunctionSymbol, Term, Variable, VARIABLE_PREFIX};

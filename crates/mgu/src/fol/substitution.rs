//! Variable bindings and substitution

use super::term::{Term, Variable};
use std::collections::BTreeMap;

/// Bindings from variables to terms.
///
/// Keyed by variable so iteration is in lexicographic name order. Inserting a
/// variable that is already bound replaces the old term without any check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub map: BTreeMap<Variable, Term>,
}

impl Bindings {
    /// Create a new empty binding table
    pub fn new() -> Self {
        Bindings {
            map: BTreeMap::new(),
        }
    }

    /// Add a variable -> term mapping, overwriting any previous one
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Get the term for a variable name, if bound
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(&Variable::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bindings in variable-name order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }

    /// Rewrite a term for display: one simultaneous substitution pass, and a
    /// second one if the result still mentions a variable. Chains longer than
    /// two hops stay partially unresolved.
    pub fn rewrite(&self, term: &Term) -> Term {
        let once = term.apply_bindings(self);
        if once.is_ground() {
            once
        } else {
            once.apply_bindings(self)
        }
    }
}

impl Term {
    /// Apply bindings to this term in a single simultaneous pass
    pub fn apply_bindings(&self, bindings: &Bindings) -> Term {
        match self {
            Term::Variable(v) => bindings.map.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Function(f, args) => {
                let new_args = args
                    .iter()
                    .map(|arg| arg.apply_bindings(bindings))
                    .collect();
                Term::Function(f.clone(), new_args)
            }
        }
    }
}

//! Terms in first-order logic

use std::fmt;

/// Prefix that marks a token as a logical variable
pub const VARIABLE_PREFIX: char = '?';

/// A logical variable, e.g. `?x1`. The name keeps its `?` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub name: String,
}

/// A function symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSymbol {
    pub name: String,
}

/// A term: a variable or a function applied to arguments.
///
/// Constants are functions of arity zero and print as `a()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(Variable),
    Function(FunctionSymbol, Vec<Term>),
}

/// Is `token` a logical variable (a `?` followed by at least one character)?
pub fn is_variable(token: &str) -> bool {
    token.starts_with(VARIABLE_PREFIX) && token.len() > 1
}

/// Anything that isn't a variable is read as a functional term
pub fn is_functional_term(token: &str) -> bool {
    !is_variable(token)
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        FunctionSymbol { name: name.into() }
    }

    /// First character of the name. Symbols are told apart by this alone,
    /// so `foo` and `fab` count as the same function.
    pub fn head(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn func(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Function(FunctionSymbol::new(name), args)
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::func(name, Vec::new())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Function(_, args) => args.iter().all(Term::is_ground),
        }
    }
}

// Deeply nested terms would otherwise overflow the stack when dropped
impl Drop for Term {
    fn drop(&mut self) {
        let Term::Function(_, args) = self else {
            return;
        };
        let mut pending = std::mem::take(args);
        while let Some(mut term) = pending.pop() {
            if let Term::Function(_, args) = &mut term {
                pending.append(args);
            }
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Function(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

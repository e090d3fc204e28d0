//! Unification of term equations

pub mod mgu;


pub use mgu::{bind, canonicalize, occurs_in, unify, ExpressionSet, Failure, FailureReason};

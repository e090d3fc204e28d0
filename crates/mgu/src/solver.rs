//! Concurrent solving: one thread per expression set
//!
//! Each worker gets exclusive `&mut` access to its own set, so nothing is
//! shared while solving. The scope is the join barrier; reporting only starts
//! once every worker has finished.

use crate::error::{MguError, Result};
use crate::unification::{unify, ExpressionSet};
use std::thread;
use std::time::Instant;
use tracing::info;

/// Default stack for solver threads. Recursion follows term nesting with no
/// depth limit, so workers get more than the platform default.
pub const DEFAULT_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Solve every set on its own thread and wait for all of them
pub fn solve(sets: &mut [ExpressionSet]) -> Result<()> {
    solve_with_stack(sets, DEFAULT_STACK_SIZE)
}

/// Like [`solve`], with an explicit worker stack size in bytes
pub fn solve_with_stack(sets: &mut [ExpressionSet], stack_size: usize) -> Result<()> {
    let start = Instant::now();
    info!(sets = sets.len(), "solving expression sets");

    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(sets.len());
        for set in sets.iter_mut() {
            let handle = thread::Builder::new()
                .name(format!("mgu-set-{}", set.id))
                .stack_size(stack_size)
                .spawn_scoped(scope, move || unify(set))
                .map_err(MguError::Spawn)?;
            handles.push(handle);
        }
        for handle in handles {
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
        }
        Ok(())
    })?;

    info!(elapsed = ?start.elapsed(), "all expression sets solved");
    Ok(())
}

/// Run `f` on a thread with the given stack size and wait for its result.
///
/// Used for the recursive work that follows solving (rewriting and printing
/// terms), which needs the same headroom as the solver itself.
pub fn with_stack<T, F>(stack_size: usize, f: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    thread::scope(|scope| -> Result<T> {
        let handle = thread::Builder::new()
            .name("mgu-report".to_string())
            .stack_size(stack_size)
            .spawn_scoped(scope, f)
            .map_err(MguError::Spawn)?;
        match handle.join() {
            Ok(value) => Ok(value),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}

/// Solve the sets one after another on the calling thread
pub fn solve_sequential(sets: &mut [ExpressionSet]) {
    for set in sets.iter_mut() {
        unify(set);
    }
}

//! Run configuration

use crate::error::{MguError, Result};
use crate::solver::DEFAULT_STACK_SIZE;
use std::fs;
use std::path::PathBuf;

/// Input file used when no path is given
pub const DEFAULT_INPUT_FILE: &str = "default.in";

/// Configuration for one run of the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MguConfig {
    /// File holding the expression sets
    pub input: PathBuf,
    /// Stack size in bytes for each solver thread
    pub stack_size: usize,
}

impl Default for MguConfig {
    fn default() -> Self {
        MguConfig {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl MguConfig {
    /// Use `input` if given, the default file otherwise
    pub fn with_input(input: Option<PathBuf>) -> Self {
        MguConfig {
            input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
            ..MguConfig::default()
        }
    }

    /// Read the whole input file
    pub fn read_input(&self) -> Result<String> {
        fs::read_to_string(&self.input).map_err(|source| MguError::Read {
            path: self.input.clone(),
            source,
        })
    }
}

//! Fatal errors that abort a whole run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MguError {
    #[error("Cannot read {}. Exiting.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Need >= 2 expressions to unify.")]
    TooFewLines,

    #[error("Failed to spawn solver thread: {0}")]
    Spawn(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, MguError>;

//! Errors raised while building or loading an automaton.
//!
//! The conversion algorithms themselves are total; only input handling can fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read transition table: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("row {row}: empty `{column}` field")]
    EmptyField { row: usize, column: &'static str },

    #[error("transition table has no rows")]
    EmptyTable,

    #[error("start state {0:?} not found in transitions")]
    UnknownStartState(String),

    #[error("accept state {0:?} not found in transitions")]
    UnknownAcceptState(String),

    #[error("automaton has no start state")]
    MissingStartState,

    #[error("too many symbols")]
    TooManySymbols,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

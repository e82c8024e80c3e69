//! Loading an NFA from a CSV transition table.
//!
//! The table has one row per `(state, symbol)` pair:
//!
//! ```text
//! current_state,input_symbol,next_states
//! q0,a,"q0,q1"
//! q0,ε,q2
//! ```
//!
//! Every field is trimmed. `next_states` lists destinations separated by
//! [`LoadOptions::destination_separator`]; it may be empty.

use crate::automaton::nfa::{Nfa, NfaBuilder};
use crate::automaton::symbol::DEFAULT_EPSILON_LABEL;
use crate::error::{Error, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["current_state", "input_symbol", "next_states"];

/// How a transition table is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub destination_separator: char,
    /// Symbol label that marks an epsilon transition.
    pub epsilon: String,
    /// Start state; the first row's `current_state` when unset.
    pub start_state: Option<String>,
    pub accept_states: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            destination_separator: ',',
            epsilon: DEFAULT_EPSILON_LABEL.to_string(),
            start_state: None,
            accept_states: Vec::new(),
        }
    }
}

impl LoadOptions {
    /// Set the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the separator between states in `next_states`.
    pub fn with_destination_separator(mut self, separator: char) -> Self {
        self.destination_separator = separator;
        self
    }

    /// Set the epsilon label.
    pub fn with_epsilon(mut self, epsilon: impl Into<String>) -> Self {
        self.epsilon = epsilon.into();
        self
    }

    /// Set the start state explicitly.
    pub fn with_start_state(mut self, state: impl Into<String>) -> Self {
        self.start_state = Some(state.into());
        self
    }

    /// Set the accept states.
    pub fn with_accept_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_states = states.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Deserialize)]
struct TableRow {
    current_state: String,
    input_symbol: String,
    next_states: String,
}

/// Load an NFA from a CSV file.
pub fn load_nfa_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Nfa> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading transition table from {}", path.display());
    load_nfa_from_reader(file, options)
}

/// Load an NFA from CSV data.
pub fn load_nfa_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Nfa> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }

    let mut builder = NfaBuilder::with_epsilon_label(&options.epsilon);
    let mut first_state: Option<String> = None;
    let mut rows = 0;

    for (index, record) in reader.deserialize::<TableRow>().enumerate() {
        let row = record?;
        let number = index + 1;
        if row.current_state.is_empty() {
            return Err(Error::EmptyField {
                row: number,
                column: "current_state",
            });
        }
        if row.input_symbol.is_empty() {
            return Err(Error::EmptyField {
                row: number,
                column: "input_symbol",
            });
        }

        let destinations = row
            .next_states
            .split(options.destination_separator)
            .map(str::trim)
            .filter(|state| !state.is_empty());
        builder.add_transition(&row.current_state, &row.input_symbol, destinations)?;

        first_state.get_or_insert(row.current_state);
        rows += 1;
    }

    let first_state = first_state.ok_or(Error::EmptyTable)?;
    let start = options.start_state.as_deref().unwrap_or(&first_state);
    if !builder.has_state(start) {
        return Err(Error::UnknownStartState(start.to_string()));
    }
    builder.set_start_state(start);

    for accept in &options.accept_states {
        if !builder.has_state(accept) {
            return Err(Error::UnknownAcceptState(accept.clone()));
        }
        builder.add_accept_state(accept);
    }

    let nfa = builder.finish()?;
    debug!(
        "loaded transition table; rows={} states={} symbols={}",
        rows,
        nfa.num_states(),
        nfa.symbol_labels().len()
    );
    Ok(nfa)
}

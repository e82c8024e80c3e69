//! Epsilon-NFA to DFA conversion.
//!
//! This module provides:
//! - An immutable ε-NFA model with interned state and symbol labels
//! - Epsilon closure computation
//! - Subset construction (NFA to DFA conversion)
//! - Canonical configuration labels and replayable transition listings
//! - A CSV transition-table loader
//! - PyO3 bindings for Python interoperability (`python` feature)

mod closure;
mod dfa;
mod format;
mod labels;
mod nfa;
#[cfg(feature = "python")]
mod python_bindings;
mod state;
mod subset_construction;
mod symbol;
mod table;
#[cfg(test)]
mod testing;

pub use closure::epsilon_closure;
pub use dfa::{Dfa, Row};
pub use format::{
    enumerate_transitions, render_configuration, StepCursor, TransitionStep, DEAD_LABEL,
};
pub use labels::Labels;
pub use nfa::{GraphEdge, Nfa, NfaBuilder};
#[cfg(feature = "python")]
pub use python_bindings::automaton;
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{is_epsilon, SymbolId, DEFAULT_EPSILON_LABEL, EPSILON};
pub use table::{load_nfa_from_path, load_nfa_from_reader, LoadOptions};

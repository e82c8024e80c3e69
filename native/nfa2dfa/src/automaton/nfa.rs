//! Epsilon Non-deterministic Finite Automaton (ε-NFA) model.

use crate::automaton::closure::epsilon_closure;
use crate::automaton::labels::Labels;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{is_epsilon, SymbolId, DEFAULT_EPSILON_LABEL, EPSILON};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A labelled edge in the graph representation: (source, destination, label).
pub type GraphEdge = (String, String, String);

/// Incrementally assembles an [`Nfa`].
///
/// States are implicitly declared by every method that mentions them.
#[derive(Debug, Clone)]
pub struct NfaBuilder {
    states: Labels,
    symbols: Labels,
    epsilon_label: String,
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    start_state: Option<StateId>,
    accept_states: StateSet,
}

impl NfaBuilder {
    /// Create a builder that treats `"ε"` as the epsilon label.
    pub fn new() -> Self {
        Self::with_epsilon_label(DEFAULT_EPSILON_LABEL)
    }

    /// Create a builder with a custom epsilon label.
    pub fn with_epsilon_label(epsilon_label: &str) -> Self {
        Self {
            states: Labels::new(),
            symbols: Labels::new(),
            epsilon_label: epsilon_label.to_string(),
            transitions: HashMap::new(),
            start_state: None,
            accept_states: StateSet::default(),
        }
    }

    /// Declare a state, returning its id.
    pub fn add_state(&mut self, label: &str) -> StateId {
        self.states.intern(label)
    }

    /// Check whether a state label has been declared so far.
    pub fn has_state(&self, label: &str) -> bool {
        self.states.contains(label)
    }

    fn intern_symbol(&mut self, label: &str) -> Result<SymbolId> {
        if label == self.epsilon_label {
            return Ok(EPSILON);
        }
        if self.symbols.id_of(label).is_none() && self.symbols.len() as u64 >= u64::from(EPSILON) {
            return Err(Error::TooManySymbols);
        }
        Ok(self.symbols.intern(label))
    }

    /// Add transitions from `source` on `symbol` to every state in
    /// `destinations`.
    ///
    /// The source state and the symbol are registered even when
    /// `destinations` is empty. A symbol equal to the epsilon label becomes
    /// an epsilon transition and stays out of the alphabet.
    pub fn add_transition<I, S>(
        &mut self,
        source: &str,
        symbol: &str,
        destinations: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let src = self.states.intern(source);
        let sym = self.intern_symbol(symbol)?;

        let mut targets = StateSet::default();
        for destination in destinations {
            targets.insert(self.states.intern(destination.as_ref()));
        }

        self.transitions
            .entry((src, sym))
            .or_default()
            .union_with(&targets);
        Ok(())
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: &str, destination: &str) {
        let src = self.states.intern(source);
        let dst = self.states.intern(destination);
        self.transitions.entry((src, EPSILON)).or_default().insert(dst);
    }

    /// Set the start state.
    pub fn set_start_state(&mut self, label: &str) {
        self.start_state = Some(self.states.intern(label));
    }

    /// Add a final (accepting) state.
    pub fn add_accept_state(&mut self, label: &str) {
        let id = self.states.intern(label);
        self.accept_states.insert(id);
    }

    /// Freeze the builder into an immutable automaton.
    pub fn finish(self) -> Result<Nfa> {
        let start_state = self.start_state.ok_or(Error::MissingStartState)?;
        Ok(Nfa {
            states: self.states,
            symbols: self.symbols,
            epsilon_label: self.epsilon_label,
            transitions: self.transitions,
            start_state,
            accept_states: self.accept_states,
        })
    }
}

impl Default for NfaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reopen a finished automaton for further edits.
impl From<Nfa> for NfaBuilder {
    fn from(nfa: Nfa) -> Self {
        Self {
            states: nfa.states,
            symbols: nfa.symbols,
            epsilon_label: nfa.epsilon_label,
            transitions: nfa.transitions,
            start_state: Some(nfa.start_state),
            accept_states: nfa.accept_states,
        }
    }
}

/// An Epsilon Non-deterministic Finite Automaton.
///
/// Built once through [`NfaBuilder`] and never mutated afterwards. Missing
/// `(state, symbol)` entries mean an empty destination set.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// State labels; a state's id is its index here
    states: Labels,
    /// Alphabet labels, excluding epsilon
    symbols: Labels,
    epsilon_label: String,
    /// Transitions: (source, symbol) -> set of destination states
    /// For epsilon transitions, symbol == EPSILON
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    start_state: StateId,
    accept_states: StateSet,
}

impl Nfa {
    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Get the state label table.
    pub fn state_labels(&self) -> &Labels {
        &self.states
    }

    /// Get the alphabet label table.
    pub fn symbol_labels(&self) -> &Labels {
        &self.symbols
    }

    /// Get the label that marks epsilon transitions.
    pub fn epsilon_label(&self) -> &str {
        &self.epsilon_label
    }

    /// Look up a state by label.
    pub fn state_id(&self, label: &str) -> Option<StateId> {
        self.states.id_of(label)
    }

    /// Look up a symbol by label; the epsilon label maps to `EPSILON`.
    pub fn symbol_id(&self, label: &str) -> Option<SymbolId> {
        if label == self.epsilon_label {
            return Some(EPSILON);
        }
        self.symbols.id_of(label)
    }

    /// Iterate over the alphabet in first-seen order.
    pub fn alphabet(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().map(|(id, _)| id)
    }

    /// Get the start state.
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Get the final states.
    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    /// Destinations of `state` on `symbol`, if any transition is recorded.
    pub fn successors(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Union of the destinations of every state in `states` on `symbol`.
    /// No epsilon closure is applied.
    pub fn step(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        debug_assert!(!is_epsilon(symbol), "use epsilon_closure for epsilon moves");

        let mut reached = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(destinations) = self.successors(state, symbol) {
                reached.union_with(destinations);
            }
        }
        reached
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        epsilon_closure(self, states)
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    fn symbol_label(&self, symbol: SymbolId) -> &str {
        if is_epsilon(symbol) {
            &self.epsilon_label
        } else {
            self.symbols.label(symbol).unwrap_or_default()
        }
    }

    /// Convert to a map representation, ordered by state and symbol id.
    pub fn to_transition_map(&self) -> IndexMap<StateId, IndexMap<SymbolId, Vec<StateId>>> {
        let mut keys: Vec<&(StateId, SymbolId)> = self.transitions.keys().collect();
        keys.sort_unstable();

        let mut map: IndexMap<StateId, IndexMap<SymbolId, Vec<StateId>>> = IndexMap::new();
        for key in keys {
            let (src, sym) = *key;
            map.entry(src)
                .or_default()
                .entry(sym)
                .or_default()
                .extend(self.transitions[key].iter());
        }
        map
    }

    /// Convert to a graph representation.
    /// Returns: (nodes, edges) where edges are (src, dst, symbol label)
    pub fn to_graph(&self) -> (Vec<String>, Vec<GraphEdge>) {
        let nodes = self.states.iter().map(|(_, label)| label.to_string()).collect();
        let mut edges = Vec::new();

        for (src, by_symbol) in self.to_transition_map() {
            for (sym, dests) in by_symbol {
                for dst in dests {
                    edges.push((
                        self.states.label(src).unwrap_or_default().to_string(),
                        self.states.label(dst).unwrap_or_default().to_string(),
                        self.symbol_label(sym).to_string(),
                    ));
                }
            }
        }

        (nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Nfa {
        // q0 -a-> {q0, q1}, q0 -ε-> q2, q2 -b-> (nothing)
        let mut builder = NfaBuilder::new();
        builder.add_transition("q0", "a", ["q0", "q1"]).unwrap();
        builder.add_transition("q0", "ε", ["q2"]).unwrap();
        builder.add_transition("q2", "b", Vec::<&str>::new()).unwrap();
        builder.set_start_state("q0");
        builder.add_accept_state("q1");
        builder.finish().unwrap()
    }

    #[test]
    fn test_builder_registers_states_and_alphabet() {
        let nfa = example();

        assert_eq!(nfa.num_states(), 3);
        assert_eq!(nfa.state_id("q2"), Some(2));
        assert_eq!(nfa.symbol_id("a"), Some(0));
        assert_eq!(nfa.symbol_id("b"), Some(1));
        assert_eq!(nfa.symbol_id("ε"), Some(EPSILON));
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(nfa.start_state(), 0);
        assert_eq!(nfa.accept_states().to_vec(), vec![1]);
    }

    #[test]
    fn test_missing_start_state() {
        let mut builder = NfaBuilder::new();
        builder.add_epsilon_transition("p", "q");
        assert!(matches!(builder.finish(), Err(Error::MissingStartState)));
    }

    #[test]
    fn test_custom_epsilon_label() {
        let mut builder = NfaBuilder::with_epsilon_label("eps");
        builder.add_transition("p", "eps", ["q"]).unwrap();
        builder.add_transition("p", "ε", ["q"]).unwrap();
        builder.set_start_state("p");
        let nfa = builder.finish().unwrap();

        assert!(nfa.successors(0, EPSILON).is_some());
        assert_eq!(nfa.symbol_id("ε"), Some(0));
        assert_eq!(nfa.alphabet().count(), 1);
    }

    #[test]
    fn test_step_does_not_close() {
        let nfa = example();
        let start = StateSet::singleton(nfa.start_state(), nfa.num_states());

        let moved = nfa.step(&start, 0);
        assert_eq!(moved.to_vec(), vec![0, 1]);

        // q2 is only reachable by epsilon and has an empty entry for b
        let from_q2 = nfa.step(&StateSet::singleton(2, 3), 1);
        assert!(from_q2.is_empty());
        assert!(nfa.step(&start, 1).is_empty());
    }

    #[test]
    fn test_reopen_into_builder() {
        let mut builder = NfaBuilder::from(example());
        builder.add_transition("q1", "c", ["q3"]).unwrap();
        let nfa = builder.finish().unwrap();

        assert_eq!(nfa.num_states(), 4);
        assert_eq!(nfa.start_state(), 0);
        assert_eq!(nfa.alphabet().count(), 3);
        assert_eq!(nfa.accept_states().to_vec(), vec![1]);
    }

    #[test]
    fn test_to_graph() {
        let nfa = example();
        let (nodes, edges) = nfa.to_graph();

        assert_eq!(nodes, vec!["q0", "q1", "q2"]);
        assert_eq!(
            edges,
            vec![
                ("q0".to_string(), "q0".to_string(), "a".to_string()),
                ("q0".to_string(), "q1".to_string(), "a".to_string()),
                ("q0".to_string(), "q2".to_string(), "ε".to_string()),
            ]
        );
        assert_eq!(nfa.transitions().count(), 3);
    }
}

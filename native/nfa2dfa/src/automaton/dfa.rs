//! Deterministic Finite Automaton (DFA) produced by subset construction.

use crate::automaton::format::render_configuration;
use crate::automaton::labels::Labels;
use crate::automaton::nfa::GraphEdge;
use crate::automaton::state::StateSet;
use crate::automaton::symbol::SymbolId;
use indexmap::{IndexMap, IndexSet};

/// Outgoing transitions of one configuration, in alphabet order.
pub type Row = IndexMap<SymbolId, StateSet>;

/// A Deterministic Finite Automaton whose states are configurations, i.e.
/// sets of NFA states.
///
/// Configurations are keyed by value. The table keeps the order in which
/// configurations were discovered, so iteration is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    /// Labels of the underlying NFA states
    states: Labels,
    /// Alphabet labels
    symbols: Labels,
    /// Initial configuration, the epsilon closure of the NFA start state
    start: StateSet,
    /// Transitions: configuration -> symbol -> configuration
    transitions: IndexMap<StateSet, Row>,
    /// Final (accepting) configurations
    accepting: IndexSet<StateSet>,
}

impl Dfa {
    pub(crate) fn new(states: Labels, symbols: Labels, start: StateSet) -> Self {
        Self {
            states,
            symbols,
            start,
            transitions: IndexMap::new(),
            accepting: IndexSet::new(),
        }
    }

    pub(crate) fn insert_row(&mut self, source: StateSet, row: Row) {
        self.transitions.insert(source, row);
    }

    pub(crate) fn add_accepting(&mut self, configuration: StateSet) {
        self.accepting.insert(configuration);
    }

    /// Get the start configuration.
    pub fn start(&self) -> &StateSet {
        &self.start
    }

    /// Number of reachable configurations, the dead one included if reached.
    pub fn num_configurations(&self) -> usize {
        self.transitions.len()
    }

    /// Iterate over the configurations in discovery order.
    pub fn configurations(&self) -> impl Iterator<Item = &StateSet> + '_ {
        self.transitions.keys()
    }

    /// Get the outgoing transitions of a configuration.
    pub fn row(&self, source: &StateSet) -> Option<&Row> {
        self.transitions.get(source)
    }

    /// Get the transition from a configuration on a symbol.
    pub fn transition(&self, source: &StateSet, symbol: SymbolId) -> Option<&StateSet> {
        self.row(source).and_then(|row| row.get(&symbol))
    }

    /// Get the accepting configurations.
    pub fn accepting(&self) -> &IndexSet<StateSet> {
        &self.accepting
    }

    /// Check if a configuration is accepting.
    pub fn is_accepting(&self, configuration: &StateSet) -> bool {
        self.accepting.contains(configuration)
    }

    /// Labels of the NFA states that configurations are made of.
    pub fn state_labels(&self) -> &Labels {
        &self.states
    }

    /// Get the alphabet label table.
    pub fn symbol_labels(&self) -> &Labels {
        &self.symbols
    }

    /// Get the label of an alphabet symbol.
    pub fn symbol_label(&self, symbol: SymbolId) -> Option<&str> {
        self.symbols.label(symbol)
    }

    /// Canonical label of a configuration, e.g. `{q0, q1}` or `∅`.
    pub fn render(&self, configuration: &StateSet) -> String {
        render_configuration(&self.states, configuration)
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateSet, SymbolId, &StateSet)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(src, row)| row.iter().map(move |(&sym, dst)| (src, sym, dst)))
    }

    /// Convert to a graph representation.
    /// Returns: (nodes, edges) where nodes are rendered configurations and
    /// edges are (src, dst, symbol label)
    pub fn to_graph(&self) -> (Vec<String>, Vec<GraphEdge>) {
        let nodes = self.configurations().map(|c| self.render(c)).collect();
        let edges = self
            .transitions()
            .map(|(src, sym, dst)| {
                (
                    self.render(src),
                    self.render(dst),
                    self.symbol_label(sym).unwrap_or_default().to_string(),
                )
            })
            .collect();

        (nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Labels {
        let mut labels = Labels::new();
        for name in names {
            labels.intern(name);
        }
        labels
    }

    #[test]
    fn test_dfa_basic() {
        let start: StateSet = [0].into_iter().collect();
        let both: StateSet = [0, 1].into_iter().collect();

        let mut dfa = Dfa::new(labels(&["q0", "q1"]), labels(&["a"]), start.clone());
        dfa.insert_row(start.clone(), Row::from([(0, both.clone())]));
        dfa.insert_row(both.clone(), Row::from([(0, both.clone())]));
        dfa.add_accepting(both.clone());

        assert_eq!(dfa.num_configurations(), 2);
        assert_eq!(dfa.start(), &start);
        assert_eq!(dfa.transition(&start, 0), Some(&both));
        assert_eq!(dfa.transition(&start, 1), None);
        assert!(dfa.is_accepting(&both));
        assert!(!dfa.is_accepting(&start));
        assert_eq!(dfa.transitions().count(), 2);
    }

    #[test]
    fn test_to_graph() {
        let start: StateSet = [1].into_iter().collect();
        let dead = StateSet::default();

        let mut dfa = Dfa::new(labels(&["s", "t"]), labels(&["x"]), start.clone());
        dfa.insert_row(start.clone(), Row::from([(0, dead.clone())]));
        dfa.insert_row(dead.clone(), Row::from([(0, dead)]));

        let (nodes, edges) = dfa.to_graph();
        assert_eq!(nodes, vec!["{t}", "∅"]);
        assert_eq!(
            edges,
            vec![
                ("{t}".to_string(), "∅".to_string(), "x".to_string()),
                ("∅".to_string(), "∅".to_string(), "x".to_string()),
            ]
        );
    }
}

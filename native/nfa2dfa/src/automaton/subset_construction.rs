//! Subset construction algorithm for converting ε-NFA to DFA.

use crate::automaton::closure::epsilon_closure;
use crate::automaton::dfa::{Dfa, Row};
use crate::automaton::nfa::Nfa;
use crate::automaton::state::StateSet;
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Convert an epsilon-NFA to a DFA using the powerset construction algorithm.
///
/// Every reachable configuration gets a row with one entry per alphabet
/// symbol; symbols with no viable continuation lead to the empty (dead)
/// configuration, which is then expanded like any other. A configuration
/// accepts iff it contains at least one NFA accept state.
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    debug!(
        "subset construction; states={} symbols={}",
        nfa.num_states(),
        nfa.symbol_labels().len()
    );

    let start = StateSet::singleton(nfa.start_state(), nfa.num_states());
    let initial = epsilon_closure(nfa, &start);

    let mut dfa = Dfa::new(
        nfa.state_labels().clone(),
        nfa.symbol_labels().clone(),
        initial.clone(),
    );

    // Configurations are compared by value, so seen sets dedup structurally
    let mut seen: HashSet<StateSet> = HashSet::new();
    let mut worklist: VecDeque<StateSet> = VecDeque::new();
    seen.insert(initial.clone());
    worklist.push_back(initial);

    while let Some(current) = worklist.pop_front() {
        if current.intersects(nfa.accept_states()) {
            dfa.add_accepting(current.clone());
        }

        let mut row = Row::with_capacity(nfa.symbol_labels().len());
        for symbol in nfa.alphabet() {
            let target = epsilon_closure(nfa, &nfa.step(&current, symbol));

            if seen.insert(target.clone()) {
                worklist.push_back(target.clone());
            }
            row.insert(symbol, target);
        }

        trace!("  configuration {:?}; row={:?}", current, row);
        dfa.insert_row(current, row);
    }

    debug!(
        "subset construction done; configurations={} accepting={}",
        dfa.num_configurations(),
        dfa.accepting().len()
    );

    dfa
}

//! Epsilon closure computation.

use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::EPSILON;
use std::collections::VecDeque;

/// Smallest superset of `states` that is closed under the epsilon
/// transitions of `nfa`.
///
/// Breadth-first: a state is enqueued only when it is first added to the
/// result, so cyclic epsilon chains terminate and the work is linear in the
/// number of states plus epsilon edges. States without recorded epsilon
/// transitions contribute nothing.
pub fn epsilon_closure(nfa: &Nfa, states: &StateSet) -> StateSet {
    let mut closure = StateSet::with_capacity(nfa.num_states());
    closure.union_with(states);

    let mut worklist: VecDeque<StateId> = states.iter().collect();

    while let Some(state) = worklist.pop_front() {
        let Some(destinations) = nfa.successors(state, EPSILON) else {
            continue;
        };
        for dest in destinations.iter() {
            if closure.insert(dest) {
                worklist.push_back(dest);
            }
        }
    }

    closure
}

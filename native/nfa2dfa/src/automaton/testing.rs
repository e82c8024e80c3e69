//! Random automata for property tests.

use crate::automaton::nfa::{Nfa, NfaBuilder};
use proptest::prelude::*;

const SYMBOLS: [&str; 3] = ["a", "b", "c"];

/// Small NFAs over states `q0..qN` with up to three symbols, arbitrary
/// epsilon edges (cycles included), unreachable states and partial
/// transitions.
pub(crate) fn arb_nfa() -> impl Strategy<Value = Nfa> {
    (1usize..=5, 0usize..=SYMBOLS.len())
        .prop_flat_map(|(num_states, num_symbols)| {
            // a symbol index equal to `num_symbols` stands for epsilon
            let edge = (0..num_states, 0..=num_symbols, 0..num_states);
            (
                Just(num_states),
                Just(num_symbols),
                prop::collection::vec(edge, 0..12),
                0..num_states,
                prop::collection::vec(any::<bool>(), num_states),
            )
        })
        .prop_map(|(num_states, num_symbols, edges, start, accepting)| {
            let mut builder = NfaBuilder::new();
            for state in 0..num_states {
                builder.add_state(&format!("q{state}"));
            }
            for symbol in &SYMBOLS[..num_symbols] {
                builder
                    .add_transition("q0", symbol, Vec::<String>::new())
                    .unwrap();
            }
            for (src, sym, dst) in edges {
                let (src, dst) = (format!("q{src}"), format!("q{dst}"));
                if sym == num_symbols {
                    builder.add_epsilon_transition(&src, &dst);
                } else {
                    builder.add_transition(&src, SYMBOLS[sym], [dst]).unwrap();
                }
            }
            for (state, accept) in accepting.into_iter().enumerate() {
                if accept {
                    builder.add_accept_state(&format!("q{state}"));
                }
            }
            builder.set_start_state(&format!("q{start}"));
            builder.finish().unwrap()
        })
}

//! Human-readable labels and step-by-step transition listings for DFAs.

use crate::automaton::dfa::Dfa;
use crate::automaton::labels::Labels;
use crate::automaton::state::StateSet;
use serde::Serialize;
use std::fmt;

/// Label used for the empty (dead) configuration.
pub const DEAD_LABEL: &str = "∅";

/// Canonical label of a configuration: member labels sorted
/// lexicographically, e.g. `{q0, q1}`. The empty configuration is `∅`.
pub fn render_configuration(labels: &Labels, configuration: &StateSet) -> String {
    if configuration.is_empty() {
        return DEAD_LABEL.to_string();
    }

    let mut members: Vec<&str> = configuration
        .iter()
        .filter_map(|state| labels.label(state))
        .collect();
    members.sort_unstable();

    format!("{{{}}}", members.join(", "))
}

/// One DFA transition described by labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionStep {
    pub source: String,
    pub symbol: String,
    pub destination: String,
}

impl fmt::Display for TransitionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.source, self.symbol, self.destination)
    }
}

/// Flatten the transition table into one step per `(configuration, symbol)`.
///
/// Sources come in discovery order and symbols in alphabet order, so the
/// listing is identical across calls on the same DFA.
pub fn enumerate_transitions(dfa: &Dfa) -> Vec<TransitionStep> {
    dfa.transitions()
        .map(|(src, sym, dst)| TransitionStep {
            source: dfa.render(src),
            symbol: dfa.symbol_label(sym).unwrap_or_default().to_string(),
            destination: dfa.render(dst),
        })
        .collect()
}

/// Replay cursor over an enumerated transition list.
#[derive(Debug, Clone)]
pub struct StepCursor {
    steps: Vec<TransitionStep>,
    position: usize,
}

impl StepCursor {
    /// Create a cursor positioned at the first step.
    pub fn new(steps: Vec<TransitionStep>) -> Self {
        Self { steps, position: 0 }
    }

    /// Create a cursor over every transition of `dfa`.
    pub fn from_dfa(dfa: &Dfa) -> Self {
        Self::new(enumerate_transitions(dfa))
    }

    /// Yield the step under the cursor and advance. `None` once exhausted.
    pub fn next_step(&mut self) -> Option<&TransitionStep> {
        let step = self.steps.get(self.position)?;
        self.position += 1;
        Some(step)
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Get the number of steps yielded since the last reset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if every step has been yielded.
    pub fn is_finished(&self) -> bool {
        self.position >= self.steps.len()
    }

    /// Get all steps.
    pub fn steps(&self) -> &[TransitionStep] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::nfa::NfaBuilder;
    use crate::automaton::subset_construction::subset_construction;

    fn labels(names: &[&str]) -> Labels {
        let mut labels = Labels::new();
        for name in names {
            labels.intern(name);
        }
        labels
    }

    fn example_dfa() -> Dfa {
        let mut builder = NfaBuilder::new();
        builder.add_transition("q0", "a", ["q0", "q1"]).unwrap();
        builder.add_transition("q0", "b", ["q1"]).unwrap();
        builder.set_start_state("q0");
        builder.add_accept_state("q1");
        subset_construction(&builder.finish().unwrap())
    }

    #[test]
    fn test_render_sorts_by_label() {
        // ids follow insertion order, labels do not
        let labels = labels(&["z", "b", "m"]);
        let configuration: StateSet = [0, 1, 2].into_iter().collect();

        assert_eq!(render_configuration(&labels, &configuration), "{b, m, z}");
        assert_eq!(render_configuration(&labels, &StateSet::singleton(0, 3)), "{z}");
        assert_eq!(render_configuration(&labels, &StateSet::default()), "∅");
    }

    #[test]
    fn test_enumerate_transitions() {
        let steps = enumerate_transitions(&example_dfa());
        let lines: Vec<String> = steps.iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec![
                "{q0} --a--> {q0, q1}",
                "{q0} --b--> {q1}",
                "{q0, q1} --a--> {q0, q1}",
                "{q0, q1} --b--> {q1}",
                "{q1} --a--> ∅",
                "{q1} --b--> ∅",
                "∅ --a--> ∅",
                "∅ --b--> ∅",
            ]
        );
    }

    #[test]
    fn test_enumerate_is_stable() {
        let dfa = example_dfa();
        assert_eq!(enumerate_transitions(&dfa), enumerate_transitions(&dfa));
    }

    #[test]
    fn test_steps_serialize_as_records() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for step in enumerate_transitions(&example_dfa()).iter().take(2) {
            writer.serialize(step).unwrap();
        }
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(
            data,
            "source,symbol,destination\n{q0},a,\"{q0, q1}\"\n{q0},b,{q1}\n"
        );
    }

    #[test]
    fn test_rebuild_gives_same_listing() {
        let first = enumerate_transitions(&example_dfa());
        let second = enumerate_transitions(&example_dfa());
        assert_eq!(first, second);
    }

    #[test]
    fn test_step_cursor() {
        let mut cursor = StepCursor::from_dfa(&example_dfa());
        assert_eq!(cursor.steps().len(), 8);

        let first = cursor.next_step().cloned();
        assert_eq!(first.as_ref().map(|s| s.symbol.as_str()), Some("a"));
        assert_eq!(cursor.position(), 1);

        while cursor.next_step().is_some() {}
        assert!(cursor.is_finished());
        assert!(cursor.next_step().is_none());
        assert_eq!(cursor.position(), 8);

        cursor.reset();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_step().cloned(), first);
    }
}

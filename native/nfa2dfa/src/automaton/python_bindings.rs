//! PyO3 bindings for the automaton module.
//!
//! States and symbols cross the boundary as their string labels.

use crate::automaton::dfa::Dfa;
use crate::automaton::format::enumerate_transitions;
use crate::automaton::nfa::{GraphEdge, NfaBuilder};
use crate::automaton::subset_construction::subset_construction;
use crate::automaton::symbol::DEFAULT_EPSILON_LABEL;
use crate::automaton::table::{load_nfa_from_path, LoadOptions};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PySet};
use std::path::PathBuf;

/// Build a NetworkX MultiDiGraph from nodes and labelled edges.
fn to_networkx<'py>(
    py: Python<'py>,
    nodes: Vec<String>,
    edges: Vec<GraphEdge>,
) -> PyResult<Bound<'py, PyAny>> {
    let nx = py.import("networkx")?;
    let graph = nx.call_method0("MultiDiGraph")?;

    for node in nodes {
        graph.call_method1("add_node", (node,))?;
    }

    for (src, dst, label) in edges {
        let kwargs = PyDict::new(py);
        kwargs.set_item("label", label)?;
        graph.call_method("add_edge", (src, dst), Some(&kwargs))?;
    }

    Ok(graph)
}

/// An Epsilon Non-deterministic Finite Automaton.
#[pyclass(name = "NFA", module = "nfa2dfa.automaton")]
pub struct PyNfa {
    builder: NfaBuilder,
}

#[pymethods]
impl PyNfa {
    #[new]
    #[pyo3(signature = (epsilon = DEFAULT_EPSILON_LABEL))]
    fn new(epsilon: &str) -> Self {
        Self {
            builder: NfaBuilder::with_epsilon_label(epsilon),
        }
    }

    /// Load a transition table with `current_state`, `input_symbol` and
    /// `next_states` columns.
    #[staticmethod]
    #[pyo3(signature = (path, accept_states, start_state = None, epsilon = DEFAULT_EPSILON_LABEL))]
    fn from_csv(
        path: PathBuf,
        accept_states: Vec<String>,
        start_state: Option<String>,
        epsilon: &str,
    ) -> PyResult<Self> {
        let mut options = LoadOptions::default()
            .with_epsilon(epsilon)
            .with_accept_states(accept_states);
        options.start_state = start_state;

        let nfa = load_nfa_from_path(path, &options)?;
        Ok(Self {
            builder: NfaBuilder::from(nfa),
        })
    }

    /// Add transitions from `source` on `symbol` to each destination.
    /// The epsilon label makes it an epsilon transition.
    fn add_transition(
        &mut self,
        source: &str,
        symbol: &str,
        destinations: Vec<String>,
    ) -> PyResult<()> {
        self.builder.add_transition(source, symbol, destinations)?;
        Ok(())
    }

    fn set_start_state(&mut self, state: &str) {
        self.builder.set_start_state(state);
    }

    /// Add a final (accepting) state.
    fn add_accept_state(&mut self, state: &str) {
        self.builder.add_accept_state(state);
    }

    /// Convert to a DFA via subset construction.
    fn to_dfa(&self) -> PyResult<PyDfa> {
        let nfa = self.builder.clone().finish()?;
        Ok(PyDfa {
            dfa: subset_construction(&nfa),
        })
    }

    /// Convert to a NetworkX MultiDiGraph.
    fn to_networkx<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let (nodes, edges) = self.builder.clone().finish()?.to_graph();
        to_networkx(py, nodes, edges)
    }
}

/// A Deterministic Finite Automaton.
#[pyclass(name = "DFA", module = "nfa2dfa.automaton")]
pub struct PyDfa {
    dfa: Dfa,
}

#[pymethods]
impl PyDfa {
    /// Label of the start configuration.
    #[getter]
    fn start_state(&self) -> String {
        self.dfa.render(self.dfa.start())
    }

    /// Labels of the accepting configurations.
    #[getter]
    fn accept_states(&self, py: Python<'_>) -> PyResult<Py<PySet>> {
        let set = PySet::empty(py)?;
        for configuration in self.dfa.accepting() {
            set.add(self.dfa.render(configuration))?;
        }
        Ok(set.unbind())
    }

    /// Labels of all configurations, in discovery order.
    fn states(&self) -> Vec<String> {
        self.dfa
            .configurations()
            .map(|configuration| self.dfa.render(configuration))
            .collect()
    }

    /// Every transition as a `(source, symbol, destination)` tuple.
    fn steps(&self) -> Vec<(String, String, String)> {
        enumerate_transitions(&self.dfa)
            .into_iter()
            .map(|step| (step.source, step.symbol, step.destination))
            .collect()
    }

    /// Every transition formatted as `source --symbol--> destination`.
    fn step_descriptions(&self) -> Vec<String> {
        enumerate_transitions(&self.dfa)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Convert to a NetworkX MultiDiGraph.
    fn to_networkx<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let (nodes, edges) = self.dfa.to_graph();
        to_networkx(py, nodes, edges)
    }
}

/// Register the automaton submodule.
pub fn automaton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNfa>()?;
    m.add_class::<PyDfa>()?;
    Ok(())
}

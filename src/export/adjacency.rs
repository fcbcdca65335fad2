//! Adjacency matrix of a network.

use crate::explore::Network;
use crate::rules::RuleLabel;
use crate::state::State;
use std::fmt::Write as _;

/// Square matrix indexed by the network's states in sorted order.
///
/// Rows are destinations and columns are sources: cell `(target, source)`
/// holds the label of the edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    states: Vec<State>,
    /// Row-major, `states.len()` squared.
    cells: Vec<Option<RuleLabel>>,
}

impl AdjacencyMatrix {
    /// Build the matrix for `network`.
    #[must_use]
    pub fn from_network(network: &Network) -> Self {
        let states: Vec<State> = network.nodes().iter().cloned().collect();
        let n = states.len();
        let mut cells = vec![None; n * n];

        for ((source, target), label) in network.edges() {
            let (Ok(row), Ok(col)) = (states.binary_search(target), states.binary_search(source))
            else {
                continue;
            };
            cells[row * n + col] = Some(*label);
        }

        Self { states, cells }
    }

    /// Row and column headers.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Label of the edge `source -> target`, if both are states of the matrix
    /// and the edge exists.
    #[must_use]
    pub fn get(&self, target: &str, source: &str) -> Option<RuleLabel> {
        let row = self.index_of(target)?;
        let col = self.index_of(source)?;
        self.cells[row * self.size() + col]
    }

    fn index_of(&self, state: &str) -> Option<usize> {
        self.states
            .binary_search_by(|s| s.as_str().cmp(state))
            .ok()
    }

    /// Render as CSV: a header row of sources, then one row per target.
    /// Missing edges are written as `0`.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for state in &self.states {
            out.push(',');
            out.push_str(state);
        }
        out.push('\n');

        for (target, row) in self.states.iter().zip(self.cells.chunks(self.size().max(1))) {
            out.push_str(target);
            for cell in row {
                match cell {
                    Some(label) => {
                        let _ = write!(out, ",{label}");
                    }
                    None => out.push_str(",0"),
                }
            }
            out.push('\n');
        }
        out
    }
}

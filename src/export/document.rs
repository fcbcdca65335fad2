//! JSON documents for networks and paths.

use crate::explore::{Network, Transition};
use crate::rules::RuleLabel;
use crate::state::State;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path as FilePath;

/// One entry of the edge map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source state.
    pub source: State,
    /// Target state.
    pub target: State,
    /// Label kept for this pair.
    pub rule: RuleLabel,
}

/// Serializable form of a [`Network`].
///
/// JSON objects cannot be keyed by pairs, so the edge map is written as a
/// list of [`EdgeRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// Starting state.
    pub axiom: State,
    /// Rounds explored.
    pub depth: u32,
    /// Every discovered state, sorted.
    pub nodes: Vec<State>,
    /// Edge map entries, sorted by (source, target).
    pub edges: Vec<EdgeRecord>,
    /// Every discovered rule application.
    pub transitions: Vec<Transition>,
}

impl From<&Network> for NetworkDocument {
    fn from(network: &Network) -> Self {
        Self {
            axiom: network.axiom().clone(),
            depth: network.depth(),
            nodes: network.nodes().iter().cloned().collect(),
            edges: network
                .edges()
                .iter()
                .map(|((source, target), rule)| EdgeRecord {
                    source: source.clone(),
                    target: target.clone(),
                    rule: *rule,
                })
                .collect(),
            transitions: network.transitions().to_vec(),
        }
    }
}

/// Write `value` as pretty-printed JSON to `file`.
///
/// # Errors
///
/// Returns an error if serialization or file I/O fails.
pub fn save_json<T: Serialize>(value: &T, file: &FilePath) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(file, json)
}

/// Read a JSON document from `file`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid `T`.
pub fn load_json<T: DeserializeOwned>(file: &FilePath) -> io::Result<T> {
    let json = fs::read_to_string(file)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

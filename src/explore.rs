//! Exhaustive bounded exploration of the state graph.
//!
//! Starting from an axiom, each round expands the states discovered in the
//! previous round with [`options`] and merges their successors into the node
//! set. After `depth` rounds the node set holds every state reachable in at
//! most `depth` rule applications, and the edge map every one-step transition
//! out of the states expanded so far.
//!
//! The node count grows multiplicatively per round (rule 2 doubles string
//! length, rule 3 branches per site), so exploration is only practical for
//! small depths: around 6 rounds. [`ExploreConfig`] caps node count and state
//! length (and optionally depth) so that an oversized request fails with an
//! [`ExploreError`] instead of exhausting memory. Once a round discovers
//! nothing new the graph is closed and the remaining rounds are skipped.

use crate::error::ExploreError;
use crate::options::options;
use crate::rules::RuleLabel;
use crate::state::State;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Depth above which exploration is documented as impractical.
pub const PRACTICAL_DEPTH: u32 = 6;

/// Resource limits for exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Largest accepted depth. Unbounded by default: growth is caught by
    /// the node and length limits.
    pub max_depth: u32,
    /// Largest node set allowed.
    pub max_nodes: usize,
    /// Longest state allowed.
    pub max_state_len: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            max_depth: u32::MAX,
            max_nodes: 1_000_000,
            max_state_len: 65_536,
        }
    }
}

/// A single discovered rule application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// State the rule was applied to.
    pub source: State,
    /// Resulting state.
    pub target: State,
    /// Rule (and site) applied.
    pub label: RuleLabel,
}

/// Snapshot of the explored graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    axiom: State,
    depth: u32,
    nodes: BTreeSet<State>,
    /// One label per ordered pair, last write wins.
    edges: BTreeMap<(State, State), RuleLabel>,
    /// Every application, including those hidden by the edge map.
    transitions: Vec<Transition>,
}

impl Network {
    /// The axiom exploration started from.
    #[must_use]
    pub fn axiom(&self) -> &State {
        &self.axiom
    }

    /// Number of rounds that were run.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Every discovered state, axiom included.
    #[must_use]
    pub fn nodes(&self) -> &BTreeSet<State> {
        &self.nodes
    }

    /// Edge map from (source, target) to the label of the transition.
    ///
    /// When several rules take the same source to the same target only one
    /// label survives here; see [`Network::transitions`] for all of them.
    #[must_use]
    pub fn edges(&self) -> &BTreeMap<(State, State), RuleLabel> {
        &self.edges
    }

    /// Every discovered rule application, in discovery order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Label of the edge `source -> target`, if discovered.
    #[must_use]
    pub fn edge(&self, source: &State, target: &State) -> Option<RuleLabel> {
        self.edges.get(&(source.clone(), target.clone())).copied()
    }

    /// Whether `state` was discovered.
    #[must_use]
    pub fn contains(&self, state: &str) -> bool {
        self.nodes.contains(state)
    }

    /// Number of discovered states.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct (source, target) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Explore from `axiom` for `depth` rounds with the default limits.
///
/// # Errors
///
/// Returns an error if a limit of [`ExploreConfig::default`] is exceeded.
pub fn discover(axiom: &State, depth: u32) -> Result<Network, ExploreError> {
    discover_with_config(axiom, depth, &ExploreConfig::default())
}

/// Explore from `axiom` for exactly `depth` rounds.
///
/// # Errors
///
/// Returns an error if `depth` exceeds `config.max_depth`, or if the node set
/// or a discovered state outgrows its configured limit.
pub fn discover_with_config(
    axiom: &State,
    depth: u32,
    config: &ExploreConfig,
) -> Result<Network, ExploreError> {
    if depth > config.max_depth {
        return Err(ExploreError::DepthLimit {
            requested: depth,
            max: config.max_depth,
        });
    }
    if depth > PRACTICAL_DEPTH {
        warn!("exploring {depth} rounds from {axiom}; node count grows multiplicatively above {PRACTICAL_DEPTH}");
    }

    let mut nodes = BTreeSet::from([axiom.clone()]);
    let mut edges = BTreeMap::new();
    let mut transitions = Vec::new();

    // States already in the set at the start of a round were expanded in an
    // earlier round with the same outcome, so only the newest ones are
    // expanded again.
    let mut frontier = vec![axiom.clone()];

    for round in 1..=depth {
        let mut new_neighbours = Vec::new();

        for node in &frontier {
            let set = options(node);
            transitions.extend(set.moves().iter().map(|m| Transition {
                source: node.clone(),
                target: m.successor.clone(),
                label: m.label,
            }));
            for (next, label) in set.iter() {
                edges.insert((node.clone(), next.clone()), label);
                new_neighbours.push(next.clone());
            }
        }

        frontier.clear();
        for next in new_neighbours {
            if next.len() > config.max_state_len {
                return Err(ExploreError::StateLengthLimit {
                    round,
                    len: next.len(),
                    max: config.max_state_len,
                });
            }
            if nodes.insert(next.clone()) {
                if nodes.len() > config.max_nodes {
                    return Err(ExploreError::NodeLimit {
                        round,
                        max: config.max_nodes,
                    });
                }
                frontier.push(next);
            }
        }

        debug!(
            "round {round}: {} new, {} nodes, {} edges",
            frontier.len(),
            nodes.len(),
            edges.len()
        );
        if frontier.is_empty() {
            // Closed under the rules; later rounds add nothing
            debug!("closed after round {round} of {depth}");
            break;
        }
    }

    Ok(Network {
        axiom: axiom.clone(),
        depth,
        nodes,
        edges,
        transitions,
    })
}

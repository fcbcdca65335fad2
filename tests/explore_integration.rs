//! Integration tests for bounded exploration and random walks.
//!
//! These tests check that exploration and walks only ever visit states
//! reachable from the axiom, and that exploration finds everything a walk can.
//!
//! Run with: cargo test --release explore_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use proptest::prelude::*;

use miu::export::{AdjacencyMatrix, NetworkDocument};
use miu::rules::apply;
use miu::{discover, options, walk_seeded, Network, RuleLabel, State};

fn state(s: &str) -> State {
    State::parse(s).unwrap()
}

/// States reachable from the axiom by following the network's edges.
fn reachable_by_edges(network: &Network) -> BTreeSet<State> {
    let mut seen = BTreeSet::from([network.axiom().clone()]);
    let mut queue = VecDeque::from([network.axiom().clone()]);
    while let Some(node) = queue.pop_front() {
        for (source, target) in network.edges().keys() {
            if *source == node && seen.insert(target.clone()) {
                queue.push_back(target.clone());
            }
        }
    }
    seen
}

type Edges = BTreeMap<(State, State), RuleLabel>;

/// Reference exploration that re-expands every known state in every round.
fn discover_reexpanding(axiom: &State, depth: u32) -> (BTreeSet<State>, Edges) {
    let mut nodes = BTreeSet::from([axiom.clone()]);
    let mut edges = Edges::new();
    for _ in 0..depth {
        let snapshot: Vec<State> = nodes.iter().cloned().collect();
        for node in &snapshot {
            for (next, label) in options(node).iter() {
                edges.insert((node.clone(), next.clone()), label);
                nodes.insert(next.clone());
            }
        }
    }
    (nodes, edges)
}

fn assert_sound(network: &Network) {
    for ((source, target), label) in network.edges() {
        assert!(network.nodes().contains(source));
        assert!(network.nodes().contains(target));
        assert_eq!(apply(source, *label).unwrap(), target.as_str());
    }
    for t in network.transitions() {
        assert_eq!(apply(&t.source, t.label).unwrap(), t.target.as_str());
    }
    assert_eq!(&reachable_by_edges(network), network.nodes());
}

#[test]
fn test_known_depth_one() {
    let network = discover(&state("MI"), 1).unwrap();
    let nodes: BTreeSet<&str> = network.nodes().iter().map(State::as_str).collect();
    assert_eq!(nodes, BTreeSet::from(["MI", "MIU", "MII"]));
    assert_eq!(network.edge(&state("MI"), &state("MIU")), Some(RuleLabel::One));
    assert_eq!(network.edge(&state("MI"), &state("MII")), Some(RuleLabel::Two));
}

#[test]
fn test_classic_network_is_sound() {
    for depth in 0..=5 {
        let network = discover(&State::axiom(), depth).unwrap();
        assert_sound(&network);
    }
}

#[test]
fn test_node_sets_grow_monotonically() {
    let mut previous = discover(&State::axiom(), 0).unwrap();
    for depth in 1..=5 {
        let network = discover(&State::axiom(), depth).unwrap();
        assert!(previous.nodes().is_subset(network.nodes()));
        for (pair, label) in previous.edges() {
            assert_eq!(network.edges().get(pair), Some(label));
        }
        previous = network;
    }
}

#[test]
fn test_classic_counts() {
    // Hand-checked sizes of the MI graph for the first rounds
    let sizes: Vec<usize> = (0..=3)
        .map(|d| discover(&State::axiom(), d).unwrap().node_count())
        .collect();
    assert_eq!(sizes, vec![1, 3, 6, 11]);
}

#[test]
fn test_rule3_sites_become_distinct_edges() {
    let network = discover(&state("MIIII"), 1).unwrap();
    assert_eq!(
        network.edge(&state("MIIII"), &state("MUI")),
        Some(RuleLabel::Three { site: 1 })
    );
    assert_eq!(
        network.edge(&state("MIIII"), &state("MIU")),
        Some(RuleLabel::Three { site: 2 })
    );
}

#[test]
fn test_walks_stay_inside_the_network() {
    let network = discover(&State::axiom(), 5).unwrap();
    for seed in 0..200 {
        let path = walk_seeded(&State::axiom(), 5, seed).unwrap();
        assert_eq!(path.len(), 6);
        for (i, (s, label)) in path.iter().enumerate() {
            assert!(network.contains(s), "seed {seed}: {s} not discovered");
            if i > 0 {
                let prev = &path.strings()[i - 1];
                assert_eq!(network.edge(prev, s), label);
            }
        }
    }
}

#[test]
fn test_exports_agree_with_network() {
    let network = discover(&State::axiom(), 3).unwrap();
    let matrix = AdjacencyMatrix::from_network(&network);
    let doc = NetworkDocument::from(&network);

    assert_eq!(matrix.size(), network.node_count());
    assert_eq!(doc.edges.len(), network.edge_count());
    for e in &doc.edges {
        assert_eq!(matrix.get(&e.target, &e.source), Some(e.rule));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Exploration from arbitrary short axioms is sound and deterministic.
    #[test]
    fn prop_discover_sound(axiom in "[MIU]{1,6}", depth in 0u32..4) {
        let axiom = State::parse(&axiom).unwrap();
        let a = discover(&axiom, depth).unwrap();
        let b = discover(&axiom, depth).unwrap();
        prop_assert_eq!(&a, &b);
        assert_sound(&a);
    }

    /// Expanding only the newest states gives the same graph as re-expanding
    /// every known state each round.
    #[test]
    fn prop_discover_matches_reexpansion(axiom in "[MIU]{1,5}", depth in 0u32..5) {
        let axiom = State::parse(&axiom).unwrap();
        let network = discover(&axiom, depth).unwrap();
        let (nodes, edges) = discover_reexpanding(&axiom, depth);
        prop_assert_eq!(network.nodes(), &nodes);
        prop_assert_eq!(network.edges(), &edges);
    }

    /// Any walk of k steps ends inside the depth-k network.
    #[test]
    fn prop_walk_within_discovered(axiom in "[MIU]{1,5}", steps in 0usize..4, seed in any::<u64>()) {
        let axiom = State::parse(&axiom).unwrap();
        let path = walk_seeded(&axiom, steps, seed).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let network = discover(&axiom, steps as u32).unwrap();

        prop_assert!(path.len() <= steps + 1);
        prop_assert!(path.len() == steps + 1 || path.is_terminal());
        for s in path.strings() {
            prop_assert!(network.contains(s));
        }
    }
}

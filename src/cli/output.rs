//! Output formatting utilities for CLI.

use miu::walk::{SampleConfig, SampleStats};
use miu::{Network, OptionSet, Path, Rule, State};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON-serializable option set.
#[derive(Debug, Serialize)]
pub(super) struct JsonOptions {
    /// Source state.
    pub(super) state: String,
    /// Distinct successors with their labels.
    pub(super) options: Vec<JsonMove>,
    /// Every application, colliding ones included.
    pub(super) moves: Vec<JsonMove>,
}

/// JSON-serializable successor.
#[derive(Debug, Serialize)]
pub(super) struct JsonMove {
    /// Resulting state.
    pub(super) successor: String,
    /// Rule label.
    pub(super) rule: String,
}

impl JsonOptions {
    /// Create from an `OptionSet`.
    pub(super) fn from_option_set(state: &State, set: &OptionSet) -> Self {
        Self {
            state: state.to_string(),
            options: set
                .iter()
                .map(|(s, label)| JsonMove {
                    successor: s.to_string(),
                    rule: label.to_string(),
                })
                .collect(),
            moves: set
                .moves()
                .iter()
                .map(|m| JsonMove {
                    successor: m.successor.to_string(),
                    rule: m.label.to_string(),
                })
                .collect(),
        }
    }
}

/// Format an option set as human-readable text.
pub(super) fn format_options_text(state: &State, set: &OptionSet) -> String {
    let mut output = String::new();

    if set.is_empty() {
        let _ = writeln!(output, "{state}: no rule applies (terminal)");
        return output;
    }

    let _ = writeln!(output, "{state}: {} successor(s)", set.len());
    for (next, label) in set.iter() {
        let _ = writeln!(output, "  [{label:>4}] {next}");
    }
    if set.moves().len() > set.len() {
        let _ = writeln!(
            output,
            "  ({} applications collide on the same successor)",
            set.moves().len() - set.len()
        );
    }

    output
}

/// Format a network as human-readable text.
pub(super) fn format_network_text(network: &Network) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Network from {} (depth: {})",
        network.axiom(),
        network.depth()
    );
    let _ = writeln!(output, "  Nodes: {}", network.node_count());
    let _ = writeln!(output, "  Edges: {}", network.edge_count());
    let hidden = network.transitions().len() - network.edge_count();
    if hidden > 0 {
        let _ = writeln!(output, "  Shadowed applications: {hidden}");
    }
    output.push('\n');

    for ((source, target), label) in network.edges() {
        let _ = writeln!(output, "  {source} -[{label}]-> {target}");
    }

    output
}

/// Format a walk as human-readable text.
pub(super) fn format_path_text(path: &Path, seed: u64, requested_steps: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Walk from {} (seed: {seed}, steps: {})",
        path.strings()[0],
        path.steps()
    );
    for (i, (state, label)) in path.iter().enumerate() {
        match label {
            Some(label) => {
                let _ = writeln!(output, "  {i:>4} [{label:>4}] {state}");
            }
            None => {
                let _ = writeln!(output, "  {i:>4} [axiom] {state}");
            }
        }
    }
    if path.steps() < requested_steps {
        let _ = writeln!(
            output,
            "  Stopped after {} of {requested_steps} steps: no rule applies to {}",
            path.steps(),
            path.last()
        );
    }

    output
}

/// JSON-serializable sample result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSampleResult {
    /// Starting state.
    axiom: String,
    /// Walks run.
    walks: u64,
    /// Steps requested per walk.
    steps: usize,
    /// Seed of the first walk.
    base_seed: u64,
    /// Walks that ran all their steps.
    completed: u64,
    /// Walks stopped at a terminal state.
    dead_ends: u64,
    /// Walks aborted by the length limit.
    length_limited: u64,
    /// Applications of rules 1-4.
    rule_counts: [u64; 4],
    /// Mean final state length.
    mean_final_len: f64,
    /// Longest final state.
    max_final_len: usize,
    /// Distinct final states.
    distinct_final_states: usize,
    /// Most frequent final states.
    most_common: Vec<JsonFinalState>,
}

/// JSON-serializable final state count.
#[derive(Debug, Serialize)]
pub(super) struct JsonFinalState {
    /// The state.
    state: String,
    /// Walks ending on it.
    count: u64,
}

impl JsonSampleResult {
    /// Create from `SampleStats`.
    pub(super) fn from_stats(
        axiom: &State,
        config: &SampleConfig,
        stats: &SampleStats,
        top: usize,
    ) -> Self {
        Self {
            axiom: axiom.to_string(),
            walks: stats.walks(),
            steps: config.steps,
            base_seed: config.base_seed,
            completed: stats.completed,
            dead_ends: stats.dead_ends,
            length_limited: stats.length_limited,
            rule_counts: stats.rule_counts,
            mean_final_len: stats.mean_final_len(),
            max_final_len: stats.max_final_len,
            distinct_final_states: stats.distinct_final_states(),
            most_common: stats
                .most_common(top)
                .into_iter()
                .map(|(s, count)| JsonFinalState {
                    state: s.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Format sample statistics as human-readable text.
pub(super) fn format_sample_text(
    axiom: &State,
    config: &SampleConfig,
    stats: &SampleStats,
    top: usize,
) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Sample from {axiom} ({} walks x {} steps, base seed: {})",
        stats.walks(),
        config.steps,
        config.base_seed
    );
    let _ = writeln!(output, "  Completed:      {}", stats.completed);
    let _ = writeln!(output, "  Dead ends:      {}", stats.dead_ends);
    let _ = writeln!(output, "  Length limited: {}", stats.length_limited);
    output.push('\n');

    output.push_str("Rule usage:\n");
    for rule in Rule::ALL {
        let _ = writeln!(output, "  Rule {rule}: {}", stats.rule_count(rule));
    }
    output.push('\n');

    let _ = writeln!(
        output,
        "Final states: {} distinct, mean length {:.1}, max length {}",
        stats.distinct_final_states(),
        stats.mean_final_len(),
        stats.max_final_len
    );
    for (state, count) in stats.most_common(top) {
        let _ = writeln!(output, "  {count:>6}  {state}");
    }

    output
}

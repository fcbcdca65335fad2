//! Graphviz DOT rendering.

use crate::explore::Network;
use crate::walk::Path;
use std::fmt::Write as _;

const HEADER: &str = "    overlap=false;\n    splines=true;\n    layout=neato;\n";

/// Render `network` as a directed DOT graph with one labelled red edge per
/// transition in the edge map. The axiom is drawn bold.
#[must_use]
pub fn render_dot(network: &Network) -> String {
    let mut out = String::from("digraph miu {\n");
    out.push_str(HEADER);

    for node in network.nodes() {
        if node == network.axiom() {
            let _ = writeln!(out, "    \"{node}\" [style=bold];");
        } else {
            let _ = writeln!(out, "    \"{node}\";");
        }
    }
    for ((source, target), label) in network.edges() {
        let _ = writeln!(out, "    \"{source}\" -> \"{target}\" [label=\"{label}\", color=red];");
    }

    out.push_str("}\n");
    out
}

/// Render a walk as a DOT chain, one edge per step.
#[must_use]
pub fn render_path_dot(path: &Path) -> String {
    let mut out = String::from("digraph walk {\n");
    out.push_str(HEADER);

    // The same state may recur along a walk, so nodes are keyed by position.
    for (i, (state, _)) in path.iter().enumerate() {
        let _ = writeln!(out, "    n{i} [label=\"{state}\"];");
    }
    for (i, (_, label)) in path.iter().enumerate().skip(1) {
        if let Some(label) = label {
            let _ = writeln!(out, "    n{} -> n{i} [label=\"{label}\", color=red];", i - 1);
        }
    }

    out.push_str("}\n");
    out
}

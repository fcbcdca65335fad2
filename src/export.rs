//! Downstream views of exploration and walk results.
//!
//! Nothing here feeds back into rewriting; these are consumers of
//! [`Network`](crate::explore::Network) and [`Path`](crate::walk::Path).
//!
//! - [`AdjacencyMatrix`]: square matrix over the network's states, as CSV
//! - [`render_dot`]: Graphviz DOT text for drawing the network
//! - [`NetworkDocument`] / [`save_json`] / [`load_json`]: JSON files

mod adjacency;
mod document;
mod dot;

pub use adjacency::AdjacencyMatrix;
pub use document::{load_json, save_json, EdgeRecord, NetworkDocument};
pub use dot::{render_dot, render_path_dot};

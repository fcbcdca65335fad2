// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Miu: exploration of Hofstadter's MIU string-rewriting system.
//!
//! Strings over {M, I, U} are rewritten by four fixed rules. Starting from an
//! axiom (classically `MI`) this crate enumerates the resulting directed state
//! graph, either exhaustively up to a depth bound or by random walks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │  Bounded Explorer    │    Random Walker     │
//! │  (explore)           │    (walk)            │
//! ├──────────────────────┴──────────────────────┤
//! │          Option Enumerator (options)        │
//! ├─────────────────────────────────────────────┤
//! │  Predicates │ Transforms │ Site Locator     │
//! │                  (rules)                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Results are plain values ([`Network`], [`Path`]) that the [`export`]
//! module turns into adjacency matrices, DOT graphs and JSON.
//!
//! # Example
//!
//! ```
//! use miu::{discover, State};
//!
//! let network = discover(&State::axiom(), 1)?;
//! assert!(network.contains("MIU"));
//! assert!(network.contains("MII"));
//! # Ok::<(), miu::ExploreError>(())
//! ```

pub mod error;
pub mod explore;
pub mod export;
pub mod options;
pub mod rules;
pub mod state;
pub mod walk;

pub use error::{ExploreError, PathError, RuleError, WalkError};
pub use explore::{discover, discover_with_config, ExploreConfig, Network, Transition};
pub use options::{options, Move, OptionSet};
pub use rules::{Rule, RuleLabel};
pub use state::{State, StateError};
pub use walk::{walk, walk_seeded, walk_with_config, Path, WalkConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        let axiom = State::axiom();
        let network = discover(&axiom, 2).unwrap();
        let path = walk_seeded(&axiom, 2, 0).unwrap();
        // Every state a two-step walk visits is in the depth-2 network
        for state in path.strings() {
            assert!(network.contains(state));
        }
    }
}

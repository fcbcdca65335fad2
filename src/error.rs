//! Error types for rule application, exploration and walks.

use crate::rules::Rule;
use std::fmt;

/// A rule transform was called on a string its rule does not apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule's predicate is false for this string.
    NotApplicable {
        /// The rule that was requested.
        rule: Rule,
        /// The source string.
        string: String,
    },
    /// Rule 3 was requested at an index where `III` does not start.
    NoSiteAt {
        /// The requested index.
        index: usize,
        /// The source string.
        string: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable { rule, string } => {
                write!(f, "rule {rule} is not applicable to {string:?}")
            }
            Self::NoSiteAt { index, string } => {
                write!(f, "no \"III\" at index {index} of {string:?}")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Resource limits hit while exploring the state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreError {
    /// Requested depth is above the configured maximum.
    DepthLimit {
        /// Depth that was requested.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },
    /// The node set grew past the configured maximum.
    NodeLimit {
        /// Round (1-based) in which the limit was crossed.
        round: u32,
        /// Configured maximum.
        max: usize,
    },
    /// A discovered state is longer than the configured maximum.
    StateLengthLimit {
        /// Round (1-based) in which the long state appeared.
        round: u32,
        /// Length of the offending state.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimit { requested, max } => {
                write!(f, "depth {requested} exceeds the limit of {max} rounds")
            }
            Self::NodeLimit { round, max } => {
                write!(f, "node limit of {max} exceeded in round {round}")
            }
            Self::StateLengthLimit { round, len, max } => write!(
                f,
                "state of length {len} found in round {round} exceeds the limit of {max}"
            ),
        }
    }
}

impl std::error::Error for ExploreError {}

/// Resource limits hit during a random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkError {
    /// The walk reached a state longer than the configured maximum.
    StateLengthLimit {
        /// Step (1-based) that produced the long state.
        step: usize,
        /// Length of the offending state.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateLengthLimit { step, len, max } => write!(
                f,
                "step {step} produced a state of length {len}, above the limit of {max}"
            ),
        }
    }
}

impl std::error::Error for WalkError {}

/// A recorded path that is not a valid walk from its first state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No states at all.
    Empty,
    /// `strings` and `rules` differ in length.
    LengthMismatch {
        /// Number of states.
        strings: usize,
        /// Number of rule slots.
        rules: usize,
    },
    /// The first rule slot must be empty.
    RuleBeforeStart,
    /// A step after the first has no rule.
    MissingRule {
        /// Offending position.
        step: usize,
    },
    /// The rule at `step` does not apply to the previous state.
    Inapplicable {
        /// Offending position.
        step: usize,
        /// Why the rule failed.
        error: RuleError,
    },
    /// The rule at `step` applies but yields a different state.
    WrongSuccessor {
        /// Offending position.
        step: usize,
        /// What the rule actually yields.
        expected: String,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path has no states"),
            Self::LengthMismatch { strings, rules } => {
                write!(f, "path has {strings} states but {rules} rule slots")
            }
            Self::RuleBeforeStart => write!(f, "first state of a path has no rule"),
            Self::MissingRule { step } => write!(f, "step {step} has no rule"),
            Self::Inapplicable { step, error } => write!(f, "step {step}: {error}"),
            Self::WrongSuccessor { step, expected } => {
                write!(f, "step {step}: rule yields {expected:?}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Result type for rule transforms.
pub type RuleResult<T> = Result<T, RuleError>;

//! Random walks through the state graph.
//!
//! A walk starts at the axiom and, at each step, moves to one of the current
//! state's distinct successors chosen uniformly at random. The random source
//! is always passed in, so a seeded generator gives a reproducible walk.
//!
//! A walk that reaches a state no rule applies to stops there and returns the
//! shorter path; [`Path::is_terminal`] tells the caller why it is short.

mod sample;

pub use sample::{sample, SampleConfig, SampleStats};

use crate::error::{PathError, WalkError};
use crate::options::options;
use crate::rules::{apply, RuleLabel};
use crate::state::State;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Limits applied to each walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Longest state a walk may produce.
    pub max_state_len: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_state_len: 65_536,
        }
    }
}

/// A sequence of states, each reached from the previous one by a rule.
///
/// `rules[0]` is always `None`; `rules[k]` is the label that took
/// `strings[k - 1]` to `strings[k]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PathRecord")]
pub struct Path {
    strings: Vec<State>,
    rules: Vec<Option<RuleLabel>>,
}

/// Unchecked wire form of a [`Path`].
#[derive(Deserialize)]
struct PathRecord {
    strings: Vec<State>,
    rules: Vec<Option<RuleLabel>>,
}

impl TryFrom<PathRecord> for Path {
    type Error = PathError;

    fn try_from(record: PathRecord) -> Result<Self, Self::Error> {
        Self::from_parts(record.strings, record.rules)
    }
}

impl Path {
    fn start(axiom: &State) -> Self {
        Self {
            strings: vec![axiom.clone()],
            rules: vec![None],
        }
    }

    fn push(&mut self, state: State, label: RuleLabel) {
        self.strings.push(state);
        self.rules.push(Some(label));
    }

    /// Build a path from its parts, checking that every step is a valid
    /// rule application.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts are empty or of different lengths, if
    /// the rule slots are malformed, or if any labelled rule does not take the
    /// previous state to the next one.
    pub fn from_parts(
        strings: Vec<State>,
        rules: Vec<Option<RuleLabel>>,
    ) -> Result<Self, PathError> {
        if strings.is_empty() {
            return Err(PathError::Empty);
        }
        if strings.len() != rules.len() {
            return Err(PathError::LengthMismatch {
                strings: strings.len(),
                rules: rules.len(),
            });
        }
        if rules[0].is_some() {
            return Err(PathError::RuleBeforeStart);
        }
        for (i, (pair, slot)) in strings.windows(2).zip(&rules[1..]).enumerate() {
            let step = i + 1;
            let label = slot.ok_or(PathError::MissingRule { step })?;
            let next = apply(&pair[0], label)
                .map_err(|error| PathError::Inapplicable { step, error })?;
            if next != pair[1].as_str() {
                return Err(PathError::WrongSuccessor {
                    step,
                    expected: next,
                });
            }
        }
        Ok(Self { strings, rules })
    }

    /// Visited states, starting with the axiom.
    #[must_use]
    pub fn strings(&self) -> &[State] {
        &self.strings
    }

    /// Rule slots, parallel to [`Path::strings`].
    #[must_use]
    pub fn rules(&self) -> &[Option<RuleLabel>] {
        &self.rules
    }

    /// Number of states (steps taken plus one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Never true: a path holds at least its starting state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Number of rule applications.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.strings.len().saturating_sub(1)
    }

    /// The state the walk ended on.
    #[must_use]
    pub fn last(&self) -> &State {
        // Non-empty by construction.
        &self.strings[self.strings.len() - 1]
    }

    /// Whether no rule applies to the final state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        options(self.last()).is_empty()
    }

    /// States paired with the rule that reached them.
    pub fn iter(&self) -> impl Iterator<Item = (&State, Option<RuleLabel>)> {
        self.strings.iter().zip(self.rules.iter().copied())
    }
}

/// Walk `num_steps` random steps from `axiom` with the default limits.
///
/// # Errors
///
/// Returns an error if a state longer than [`WalkConfig::default`] allows is
/// produced.
pub fn walk<R: Rng>(axiom: &State, num_steps: usize, rng: &mut R) -> Result<Path, WalkError> {
    walk_with_config(axiom, num_steps, &WalkConfig::default(), rng)
}

/// Walk `num_steps` random steps from `axiom`, using a [`SmallRng`] seeded
/// with `seed`.
///
/// # Errors
///
/// Returns an error if a state longer than [`WalkConfig::default`] allows is
/// produced.
pub fn walk_seeded(axiom: &State, num_steps: usize, seed: u64) -> Result<Path, WalkError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    walk(axiom, num_steps, &mut rng)
}

/// Walk up to `num_steps` random steps from `axiom`.
///
/// Returns a path of `num_steps + 1` states, or fewer if a terminal state is
/// reached first.
///
/// # Errors
///
/// Returns an error if a step produces a state longer than
/// `config.max_state_len`.
pub fn walk_with_config<R: Rng>(
    axiom: &State,
    num_steps: usize,
    config: &WalkConfig,
    rng: &mut R,
) -> Result<Path, WalkError> {
    let mut path = Path::start(axiom);

    for step in 1..=num_steps {
        let set = options(path.last());
        let Some((next, label)) = set.choose(rng) else {
            debug!(
                "walk from {axiom} stopped at terminal state {} after {} steps",
                path.last(),
                path.steps()
            );
            break;
        };
        if next.len() > config.max_state_len {
            return Err(WalkError::StateLengthLimit {
                step,
                len: next.len(),
                max: config.max_state_len,
            });
        }
        trace!("step {step}: {} -[{label}]-> {next}", path.last());
        path.push(next.clone(), label);
    }

    Ok(path)
}

//! Many independent walks, run in parallel and summarised.
//!
//! Walk `i` is seeded with `base_seed + i`, so a sample is reproducible and
//! its statistics do not depend on the number of threads.

// Statistics use intentional casts
#![allow(clippy::cast_precision_loss)]

use super::{walk_with_config, Path, WalkConfig};
use crate::error::WalkError;
use crate::rules::Rule;
use crate::state::State;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a batch of walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Number of walks.
    pub walks: u64,
    /// Steps per walk.
    pub steps: usize,
    /// Seed of the first walk.
    pub base_seed: u64,
    /// Limits for each walk.
    pub walk: WalkConfig,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            walks: 1000,
            steps: 10,
            base_seed: 42,
            walk: WalkConfig::default(),
        }
    }
}

/// Aggregated outcome of a batch of walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Walks that ran all their steps.
    pub completed: u64,
    /// Walks that stopped early at a terminal state.
    pub dead_ends: u64,
    /// Walks aborted by the state length limit.
    pub length_limited: u64,
    /// Applications of rules 1-4 across all finished walks.
    pub rule_counts: [u64; 4],
    /// Longest final state seen.
    pub max_final_len: usize,
    /// Sum of final state lengths, for the mean.
    total_final_len: u64,
    /// How often each final state was reached.
    final_states: BTreeMap<State, u64>,
}

impl SampleStats {
    /// Total walks accounted for.
    #[must_use]
    pub fn walks(&self) -> u64 {
        self.completed + self.dead_ends + self.length_limited
    }

    /// Record a finished walk that was asked to take `steps` steps.
    pub fn add_path(&mut self, path: &Path, steps: usize) {
        if path.steps() < steps {
            self.dead_ends += 1;
        } else {
            self.completed += 1;
        }

        for label in path.rules().iter().flatten() {
            self.rule_counts[usize::from(label.rule().number() - 1)] += 1;
        }

        let final_len = path.last().len();
        self.total_final_len += final_len as u64;
        self.max_final_len = self.max_final_len.max(final_len);
        *self.final_states.entry(path.last().clone()).or_insert(0) += 1;
    }

    /// Record an aborted walk.
    pub fn add_error(&mut self, error: &WalkError) {
        match error {
            WalkError::StateLengthLimit { .. } => self.length_limited += 1,
        }
    }

    /// Merge another set of statistics into this one.
    pub fn merge(&mut self, other: &Self) {
        self.completed += other.completed;
        self.dead_ends += other.dead_ends;
        self.length_limited += other.length_limited;
        for (total, count) in self.rule_counts.iter_mut().zip(other.rule_counts) {
            *total += count;
        }
        self.max_final_len = self.max_final_len.max(other.max_final_len);
        self.total_final_len += other.total_final_len;
        for (state, count) in &other.final_states {
            *self.final_states.entry(state.clone()).or_insert(0) += count;
        }
    }

    /// Applications of `rule` across all finished walks.
    #[must_use]
    pub fn rule_count(&self, rule: Rule) -> u64 {
        self.rule_counts[usize::from(rule.number() - 1)]
    }

    /// Mean length of the final state over finished walks.
    #[must_use]
    pub fn mean_final_len(&self) -> f64 {
        let finished = self.completed + self.dead_ends;
        if finished == 0 {
            return 0.0;
        }
        self.total_final_len as f64 / finished as f64
    }

    /// Number of distinct final states.
    #[must_use]
    pub fn distinct_final_states(&self) -> usize {
        self.final_states.len()
    }

    /// The `n` most frequent final states, most frequent first, ties broken by
    /// string order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&State, u64)> {
        let mut counts: Vec<(&State, u64)> =
            self.final_states.iter().map(|(s, &c)| (s, c)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(n);
        counts
    }
}

/// Run `config.walks` seeded walks from `axiom` in parallel.
#[must_use]
pub fn sample(axiom: &State, config: &SampleConfig) -> SampleStats {
    (0..config.walks)
        .into_par_iter()
        .fold(SampleStats::default, |mut stats, i| {
            let mut rng = SmallRng::seed_from_u64(config.base_seed.wrapping_add(i));
            match walk_with_config(axiom, config.steps, &config.walk, &mut rng) {
                Ok(path) => stats.add_path(&path, config.steps),
                Err(e) => stats.add_error(&e),
            }
            stats
        })
        .reduce(SampleStats::default, |mut a, b| {
            a.merge(&b);
            a
        })
}

//! One-step successors of a state.
//!
//! [`options`] is the single primitive shared by the explorer and the walker.

use crate::rules::{apply_rule1, apply_rule2, apply_rule3, apply_rule4, rule3_sites, RuleLabel};
use crate::state::State;
use rand::Rng;
use std::collections::HashMap;

/// A single rule application: the successor it yields and the rule that did it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    /// Resulting state.
    pub successor: State,
    /// Rule (and site) applied.
    pub label: RuleLabel,
}

/// The out-neighbourhood of a state.
///
/// Viewed as a map from successor to label, keys are unique and a successor
/// reached by more than one application keeps the label of the last one
/// (in enumeration order 1, 2, 3@site ascending, 4) while holding the position
/// of the first. Every individual application is still available through
/// [`OptionSet::moves`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    /// Distinct successors with their winning label, in first-seen order.
    entries: Vec<(State, RuleLabel)>,
    /// Position of each successor in `entries`.
    index: HashMap<State, usize>,
    /// Every application, in enumeration order.
    moves: Vec<Move>,
}

impl OptionSet {
    fn insert(&mut self, successor: String, label: RuleLabel) {
        let successor = State::from_successor(successor);
        if let Some(&pos) = self.index.get(&successor) {
            self.entries[pos].1 = label;
        } else {
            self.index.insert(successor.clone(), self.entries.len());
            self.entries.push((successor.clone(), label));
        }
        self.moves.push(Move { successor, label });
    }

    /// Number of distinct successors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no rule applies (a terminal state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label recorded for `successor`, if it is reachable in one step.
    #[must_use]
    pub fn get(&self, successor: &str) -> Option<RuleLabel> {
        self.index.get(successor).map(|&pos| self.entries[pos].1)
    }

    /// Distinct successors with their labels.
    pub fn iter(&self) -> impl Iterator<Item = (&State, RuleLabel)> {
        self.entries.iter().map(|(s, label)| (s, *label))
    }

    /// Distinct successors.
    pub fn successors(&self) -> impl Iterator<Item = &State> {
        self.entries.iter().map(|(s, _)| s)
    }

    /// Every rule application, including ones whose successor collides with
    /// another application's.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Pick one distinct successor uniformly at random.
    ///
    /// Returns `None` for a terminal state.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<(&State, RuleLabel)> {
        if self.entries.is_empty() {
            return None;
        }
        let (state, label) = &self.entries[rng.gen_range(0..self.entries.len())];
        Some((state, *label))
    }
}

/// Every state reachable from `state` by one rule application.
///
/// Rule 3 contributes one entry per `III` site; rule 4 contributes at most
/// one entry (leftmost `UU`). Empty iff no rule applies.
#[must_use]
pub fn options(state: &State) -> OptionSet {
    let s = state.as_str();
    let mut set = OptionSet::default();

    if let Ok(next) = apply_rule1(s) {
        set.insert(next, RuleLabel::One);
    }
    if let Ok(next) = apply_rule2(s) {
        set.insert(next, RuleLabel::Two);
    }
    for site in rule3_sites(s) {
        if let Ok(next) = apply_rule3(s, site) {
            set.insert(next, RuleLabel::Three { site });
        }
    }
    if let Ok(next) = apply_rule4(s) {
        set.insert(next, RuleLabel::Four);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn state(s: &str) -> State {
        State::parse(s).unwrap()
    }

    #[test]
    fn test_options_of_axiom() {
        let set = options(&state("MI"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("MIU"), Some(RuleLabel::One));
        assert_eq!(set.get("MII"), Some(RuleLabel::Two));
    }

    #[test]
    fn test_rule3_branches_per_site() {
        let set = options(&state("MIIII"));
        assert_eq!(set.get("MUI"), Some(RuleLabel::Three { site: 1 }));
        assert_eq!(set.get("MIU"), Some(RuleLabel::Three { site: 2 }));
        assert_eq!(set.get("MIIIIU"), Some(RuleLabel::One));
        assert_eq!(set.get("MIIIIIIII"), Some(RuleLabel::Two));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_rule4_single_valued() {
        // Two overlapping UU windows, but only the leftmost is rewritten
        let set = options(&state("MUUU"));
        let rule4: Vec<_> = set
            .moves()
            .iter()
            .filter(|m| m.label == RuleLabel::Four)
            .collect();
        assert_eq!(rule4.len(), 1);
        assert_eq!(rule4[0].successor.as_str(), "MU");
    }

    #[test]
    fn test_terminal_state() {
        let set = options(&state("U"));
        assert!(set.is_empty());
        assert!(set.moves().is_empty());

        let mut rng = SmallRng::seed_from_u64(1);
        assert!(set.choose(&mut rng).is_none());
    }

    #[test]
    fn test_self_loop() {
        // Rule 2 on a bare M reproduces it
        let set = options(&state("M"));
        assert_eq!(set.get("M"), Some(RuleLabel::Two));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_last_label_wins_first_position_kept() {
        let mut set = OptionSet::default();
        set.insert("MU".to_string(), RuleLabel::Three { site: 1 });
        set.insert("MIU".to_string(), RuleLabel::One);
        set.insert("MU".to_string(), RuleLabel::Four);

        assert_eq!(set.len(), 2);
        assert_eq!(set.moves().len(), 3);
        assert_eq!(set.get("MU"), Some(RuleLabel::Four));
        let order: Vec<&str> = set.successors().map(State::as_str).collect();
        assert_eq!(order, vec!["MU", "MIU"]);
    }

    #[test]
    fn test_long_i_run_enumerates_every_site() {
        // M followed by n I's has n - 2 distinct rule 3 successors
        let n = 4000;
        let set = options(&state(&format!("M{}", "I".repeat(n))));
        assert_eq!(set.len(), n);
        assert_eq!(set.moves().len(), n);

        let middle = format!("M{}U{}", "I".repeat(1000), "I".repeat(n - 1003));
        assert_eq!(set.get(&middle), Some(RuleLabel::Three { site: 1001 }));
        let last = set.successors().last().unwrap();
        assert_eq!(last.as_str(), format!("M{}U", "I".repeat(n - 3)));
    }

    #[test]
    fn test_choose_is_a_member() {
        let set = options(&state("MIIII"));
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let (next, label) = set.choose(&mut rng).unwrap();
            assert_eq!(set.get(next), Some(label));
        }
    }
}

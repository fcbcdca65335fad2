//! Property-based tests for the rule predicates, transforms and enumerator.
//!
//! Run with: cargo test --release prop_rules

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use miu::rules::{
    apply, apply_rule1, apply_rule2, apply_rule3, apply_rule4, rule1_applicable,
    rule2_applicable, rule3_applicable, rule3_sites, rule4_applicable,
};
use miu::{options, RuleLabel, State};

/// Naive overlapping count of `III`.
fn count_iii(s: &str) -> usize {
    (0..s.len()).filter(|&i| s[i..].starts_with("III")).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Sites are strictly ascending, each one starts an `III`, and none is missed.
    #[test]
    fn prop_rule3_sites_exact(s in "[MIU]{0,40}") {
        let sites = rule3_sites(&s);

        prop_assert!(sites.windows(2).all(|w| w[0] < w[1]));
        for &i in &sites {
            prop_assert_eq!(&s[i..i + 3], "III");
        }
        prop_assert_eq!(sites.len(), count_iii(&s));
        prop_assert_eq!(sites.is_empty(), !rule3_applicable(&s));
    }

    /// Rule 1 is defined iff its predicate holds, and appends exactly one `U`.
    #[test]
    fn prop_rule1_appends_u(s in "[MIU]{0,30}") {
        match apply_rule1(&s) {
            Ok(out) => {
                prop_assert!(rule1_applicable(&s));
                prop_assert_eq!(out.len(), s.len() + 1);
                prop_assert_eq!(out, format!("{s}U"));
            }
            Err(_) => prop_assert!(!rule1_applicable(&s)),
        }
    }

    /// Rule 2 duplicates everything after the leading `M`.
    #[test]
    fn prop_rule2_duplicates_tail(s in "[MIU]{0,30}") {
        match apply_rule2(&s) {
            Ok(out) => {
                prop_assert!(rule2_applicable(&s));
                prop_assert_eq!(out.len(), 2 * s.len() - 1);
                prop_assert!(out.starts_with(s.as_str()));
                prop_assert!(out.ends_with(&s[1..]));
            }
            Err(_) => prop_assert!(!rule2_applicable(&s)),
        }
    }

    /// Rule 3 succeeds exactly at the located sites.
    #[test]
    fn prop_rule3_only_at_sites(s in "[MIU]{0,30}", extra in 0usize..4) {
        let sites = rule3_sites(&s);
        for i in 0..s.len() + extra {
            let result = apply_rule3(&s, i);
            if sites.contains(&i) {
                let out = result.unwrap();
                prop_assert_eq!(out.len(), s.len() - 2);
                prop_assert_eq!(&out[..i], &s[..i]);
                prop_assert_eq!(&out[i..=i], "U");
                prop_assert_eq!(&out[i + 1..], &s[i + 3..]);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }

    /// Rule 4 removes the leftmost `UU` and nothing else.
    #[test]
    fn prop_rule4_removes_leftmost(s in "[MIU]{0,30}") {
        match apply_rule4(&s) {
            Ok(out) => {
                prop_assert!(rule4_applicable(&s));
                let index = s.find("UU").unwrap();
                prop_assert_eq!(out.len(), s.len() - 2);
                prop_assert_eq!(out, format!("{}{}", &s[..index], &s[index + 2..]));
            }
            Err(_) => prop_assert!(!rule4_applicable(&s)),
        }
    }

    /// Every enumerated move is a valid application, and every applicable
    /// rule (rule 3 once per site) is enumerated.
    #[test]
    fn prop_options_complete_and_sound(s in "[MIU]{1,30}") {
        let state = State::parse(&s).unwrap();
        let set = options(&state);

        let expected = usize::from(rule1_applicable(&s))
            + usize::from(rule2_applicable(&s))
            + rule3_sites(&s).len()
            + usize::from(rule4_applicable(&s));
        prop_assert_eq!(set.moves().len(), expected);
        prop_assert_eq!(set.is_empty(), expected == 0);

        for m in set.moves() {
            prop_assert_eq!(apply(&s, m.label).unwrap(), m.successor.as_str());
        }
        for (next, label) in set.iter() {
            prop_assert_eq!(apply(&s, label).unwrap(), next.as_str());
        }

        let rule4_moves = set.moves().iter().filter(|m| m.label == RuleLabel::Four).count();
        prop_assert!(rule4_moves <= 1);
    }

    /// Successors of a valid state are valid states.
    #[test]
    fn prop_successors_stay_in_alphabet(s in "[MIU]{1,30}") {
        let state = State::parse(&s).unwrap();
        for next in options(&state).successors() {
            prop_assert!(State::parse(next).is_ok());
        }
    }
}

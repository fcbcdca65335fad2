#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use miu::rules::{apply, apply_rule3, rule3_sites};
use miu::{options, State};

/// Structured input for rule fuzzing.
#[derive(Arbitrary, Debug)]
struct RuleInput {
    /// Raw string; also mapped onto the alphabet for the enumerator.
    raw: String,
    /// Arbitrary index for rule 3.
    index: usize,
}

fuzz_target!(|input: RuleInput| {
    // Transforms must never panic, whatever the input
    let _ = apply_rule3(&input.raw, input.index);
    for site in rule3_sites(&input.raw) {
        assert!(apply_rule3(&input.raw, site).is_ok());
    }

    // Cap length to keep rule 2 output small
    let mapped: String = input
        .raw
        .bytes()
        .take(64)
        .map(|b| match b % 3 {
            0 => 'M',
            1 => 'I',
            _ => 'U',
        })
        .collect();
    let Ok(state) = State::parse(&mapped) else {
        return;
    };

    let set = options(&state);
    for m in set.moves() {
        let next = apply(&state, m.label).expect("enumerated move must apply");
        assert_eq!(next, m.successor.as_str());
        assert!(State::parse(&next).is_ok());
    }
});

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use miu::{walk_seeded, Path, State};

/// Structured input for walk fuzzing.
#[derive(Arbitrary, Debug)]
struct WalkInput {
    /// Axiom symbols (mapped onto the alphabet).
    axiom: Vec<u8>,
    /// Number of steps (capped).
    steps: u8,
    /// RNG seed.
    seed: u64,
}

fuzz_target!(|input: WalkInput| {
    let axiom: String = input
        .axiom
        .iter()
        .take(16)
        .map(|b| match b % 3 {
            0 => 'M',
            1 => 'I',
            _ => 'U',
        })
        .collect();
    let Ok(axiom) = State::parse(&axiom) else {
        return;
    };

    // Rule 2 doubles length, so keep walks short
    let steps = usize::from(input.steps % 12);
    let Ok(path) = walk_seeded(&axiom, steps, input.seed) else {
        return;
    };

    assert!(path.len() <= steps + 1);
    assert!(path.len() == steps + 1 || path.is_terminal());
    let rebuilt = Path::from_parts(path.strings().to_vec(), path.rules().to_vec());
    assert_eq!(rebuilt.as_ref(), Ok(&path));
});

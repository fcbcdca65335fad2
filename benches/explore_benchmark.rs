//! Benchmarks for option enumeration, exploration and walks.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use miu::walk::{SampleConfig, sample};
use miu::{State, discover, options, walk_seeded};

fn bench_options(c: &mut Criterion) {
    let states: Vec<State> = ["MI", "MIIII", "MIIIIIIII", "MUUIUUIIIU"]
        .iter()
        .filter_map(|s| State::parse(s).ok())
        .collect();

    c.bench_function("options_mixed", |b| {
        b.iter(|| {
            for state in &states {
                let _ = black_box(options(state));
            }
        });
    });
}

fn bench_discover(c: &mut Criterion) {
    let axiom = State::axiom();

    c.bench_function("discover_depth_4", |b| {
        b.iter(|| black_box(discover(&axiom, 4)));
    });
    c.bench_function("discover_depth_5", |b| {
        b.iter(|| black_box(discover(&axiom, 5)));
    });
}

fn bench_walk(c: &mut Criterion) {
    let axiom = State::axiom();

    c.bench_function("walk_12_steps", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(walk_seeded(&axiom, 12, seed))
        });
    });

    let config = SampleConfig {
        walks: 1000,
        steps: 10,
        ..SampleConfig::default()
    };
    c.bench_function("sample_1000_walks", |b| {
        b.iter(|| black_box(sample(&axiom, &config)));
    });
}

criterion_group!(benches, bench_options, bench_discover, bench_walk);
criterion_main!(benches);

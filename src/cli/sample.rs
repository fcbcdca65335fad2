//! Sample command implementation.

use super::output::{format_sample_text, JsonSampleResult};
use super::{resolve_seed, CliError, SummaryFormat};
use indicatif::{ProgressBar, ProgressStyle};
use miu::walk::{sample, SampleConfig};
use miu::{State, WalkConfig};
use std::time::Instant;

/// Execute the sample command.
///
/// # Errors
///
/// Returns an error if the progress bar or JSON output cannot be built.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    axiom: &State,
    steps: usize,
    walks: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    max_len: Option<usize>,
    top: usize,
    format: SummaryFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let mut walk = WalkConfig::default();
    if let Some(l) = max_len {
        walk.max_state_len = l;
    }
    let config = SampleConfig {
        walks,
        steps,
        base_seed: resolve_seed(seed),
        walk,
    };

    let pb = if progress {
        let pb = ProgressBar::new(walks);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} walks ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = sample(axiom, &config);

    // Update progress bar after completion (no atomics in the walk loop)
    if let Some(pb) = pb {
        pb.set_position(stats.walks());
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match format {
        SummaryFormat::Text => {
            print!("{}", format_sample_text(axiom, &config, &stats, top));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSampleResult::from_stats(
                axiom, &config, &stats, top,
            ))?;
            println!("{json}");
        }
    }

    Ok(())
}

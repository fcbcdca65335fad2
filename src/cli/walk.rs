//! Walk command implementation.

use super::output::format_path_text;
use super::{resolve_seed, CliError, WalkFormat};
use miu::export::{render_path_dot, save_json};
use miu::{walk_with_config, State, WalkConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::Path;

/// Execute the walk command.
///
/// # Errors
///
/// Returns an error if the walk exceeds its length limit or output fails.
pub(crate) fn execute(
    axiom: &State,
    steps: usize,
    seed: Option<u64>,
    max_len: Option<usize>,
    format: WalkFormat,
    save: Option<&Path>,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let mut config = WalkConfig::default();
    if let Some(l) = max_len {
        config.max_state_len = l;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let path = walk_with_config(axiom, steps, &config, &mut rng)?;

    if let Some(save_path) = save {
        save_json(&path, save_path)
            .map_err(|e| CliError::new(format!("Failed to save path: {e}")))?;
    }

    match format {
        WalkFormat::Text => print!("{}", format_path_text(&path, seed, steps)),
        WalkFormat::Json => println!("{}", serde_json::to_string_pretty(&path)?),
        WalkFormat::Dot => print!("{}", render_path_dot(&path)),
    }

    Ok(())
}

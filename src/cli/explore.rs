//! Explore command implementation.

use super::output::format_network_text;
use super::{CliError, ExploreFormat};
use miu::export::{load_json, render_dot, save_json, AdjacencyMatrix, NetworkDocument};
use miu::{discover_with_config, ExploreConfig, State};
use std::path::{Path, PathBuf};

/// Exploration limits as given on the command line.
#[derive(Debug)]
pub(crate) struct Limits {
    /// JSON file holding an [`ExploreConfig`].
    pub(crate) config: Option<PathBuf>,
    /// Overrides `max_depth`.
    pub(crate) max_depth: Option<u32>,
    /// Overrides `max_nodes`.
    pub(crate) max_nodes: Option<usize>,
    /// Overrides `max_state_len`.
    pub(crate) max_len: Option<usize>,
}

impl Limits {
    /// Load the config file (or defaults) and apply flag overrides.
    fn resolve(&self) -> Result<ExploreConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_json(path).map_err(|e| {
                CliError::new(format!("Failed to load {}: {e}", path.display()))
            })?,
            None => ExploreConfig::default(),
        };
        if let Some(d) = self.max_depth {
            config.max_depth = d;
        }
        if let Some(n) = self.max_nodes {
            config.max_nodes = n;
        }
        if let Some(l) = self.max_len {
            config.max_state_len = l;
        }
        Ok(config)
    }
}

/// Execute the explore command.
///
/// # Errors
///
/// Returns an error if the limits cannot be loaded, a limit is exceeded, or
/// output fails.
pub(crate) fn execute(
    axiom: &State,
    depth: u32,
    limits: &Limits,
    format: ExploreFormat,
    save: Option<&Path>,
) -> Result<(), CliError> {
    let config = limits.resolve()?;
    let network = discover_with_config(axiom, depth, &config)?;

    if let Some(save_path) = save {
        save_json(&NetworkDocument::from(&network), save_path).map_err(|e| {
            CliError::new(format!("Failed to save network: {e}"))
        })?;
    }

    match format {
        ExploreFormat::Text => print!("{}", format_network_text(&network)),
        ExploreFormat::Json => {
            let json = serde_json::to_string_pretty(&NetworkDocument::from(&network))?;
            println!("{json}");
        }
        ExploreFormat::Csv => print!("{}", AdjacencyMatrix::from_network(&network).to_csv()),
        ExploreFormat::Dot => print!("{}", render_dot(&network)),
    }

    Ok(())
}

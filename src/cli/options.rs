//! Options command implementation.

use super::output::{format_options_text, JsonOptions};
use super::{CliError, SummaryFormat};
use miu::{options, State};

/// Execute the options command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(state: &State, format: SummaryFormat) -> Result<(), CliError> {
    let set = options(state);

    match format {
        SummaryFormat::Text => print!("{}", format_options_text(state, &set)),
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOptions::from_option_set(state, &set))?;
            println!("{json}");
        }
    }

    Ok(())
}

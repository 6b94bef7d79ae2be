//! Tui command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the tui command
///
/// Completed computations are printed once the terminal is restored.
pub fn execute_tui(config: &CliConfig) -> CliResult<()> {
    let app = tapcalc::tui::run(&config.calculator)?;
    let history = app.calculator().history();
    if !config.verbosity.is_quiet() && !history.is_empty() {
        println!("{}", history.export_formatted());
    }
    Ok(())
}

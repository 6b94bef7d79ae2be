//! Tapcalc CLI: button-driven calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! tapcalc press 1 2 + 3 =          # Print the display after each press
//! tapcalc press --final '12÷4='    # Print only the result
//! tapcalc tui                      # Interactive terminal keypad
//! tapcalc keypad                   # Keypad layout and widget ids
//! ```

use clap::Parser;
use std::process::ExitCode;
use tapcalc_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Log lines on stderr would tear the raw-mode screen
    if !matches!(cli.command, Commands::Tui) {
        logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));
    }

    // Build configuration from CLI args
    let config = CliConfig::from_cli(&cli)?;

    match &cli.command {
        Commands::Press(args) => handlers::press::execute_press(&config, args),
        Commands::Tui => handlers::tui::execute_tui(&config),
        Commands::Keypad(args) => handlers::keypad::execute_keypad(&config, args),
        Commands::Config(args) => handlers::config::execute_config(&config, args),
    }
}

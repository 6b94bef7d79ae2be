//! Tapcalc CLI Library
//!
//! Command-line host for the tapcalc keypad calculator: replay presses, run
//! the terminal keypad, inspect the keypad and configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, ConfigFormatArg, KeypadArgs, OutputFormatArg, PressArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};

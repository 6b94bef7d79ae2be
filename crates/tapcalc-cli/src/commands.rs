//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tapcalc: button-driven four-function calculator
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Calculator configuration file (YAML, or JSON with a .json extension)
    #[arg(long = "config", global = true, env = "TAPCALC_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Report division by zero as an error instead of showing zero
    #[arg(long, global = true)]
    pub strict_division: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons and print the display after each press
    ///
    /// Each argument is a button label. Arguments that are not a label are
    /// split into single characters, so `12+3=` presses five buttons.
    Press(PressArgs),

    /// Start the interactive terminal keypad
    Tui,

    /// Show the keypad layout and widget ids
    Keypad(KeypadArgs),

    /// Show the effective calculator configuration
    Config(ConfigArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels to press, in order
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub labels: Vec<String>,

    /// Print only the final display
    #[arg(long = "final")]
    pub final_only: bool,

    /// Print a JSON transcript instead of text
    #[arg(long)]
    pub json: bool,

    /// Print completed computations after the presses
    #[arg(long)]
    pub history: bool,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,

    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormatArg,
}

/// Output format for listings
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Output format for configuration
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormatArg {
    /// YAML, the format config files are written in
    #[default]
    Yaml,
    /// JSON output
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

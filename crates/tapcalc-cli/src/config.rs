//! CLI configuration

use serde::{Deserialize, Serialize};
use tapcalc::config::{CalculatorConfig, DivisionPolicy};
use tapcalc::core::CalcError;

use crate::commands::Cli;
use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - one log line per result
    Verbose,
    /// Debug - one log line per press
    Debug,
}

impl Verbosity {
    /// Maps the `-q` flag and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Settings passed to every calculator the CLI creates
    pub calculator: CalculatorConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set calculator settings
    #[must_use]
    pub const fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }

    /// Builds configuration from parsed arguments
    ///
    /// Calculator settings come from `--config` when given; `--strict-division`
    /// overrides the file.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut calculator = match &cli.config_file {
            Some(path) => CalculatorConfig::load(path).map_err(|e| match e {
                CalcError::Config(message) => CliError::config(message),
                other => CliError::from(other),
            })?,
            None => CalculatorConfig::default(),
        };
        if cli.strict_division {
            calculator = calculator.with_division_by_zero(DivisionPolicy::Error);
        }

        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_color(cli.color.into())
            .with_calculator(calculator))
    }

    /// Whether styled output should be written
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.should_color()
    }
}

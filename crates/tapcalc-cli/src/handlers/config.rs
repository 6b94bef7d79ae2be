//! Config command handler

use tapcalc::config::CalculatorConfig;

use crate::commands::{ConfigArgs, ConfigFormatArg};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let calculator = if args.defaults {
        CalculatorConfig::default()
    } else {
        config.calculator.clone()
    };
    print!("{}", render_config(&calculator, args.format)?);
    Ok(())
}

/// Renders calculator settings in the requested format
pub fn render_config(config: &CalculatorConfig, format: ConfigFormatArg) -> CliResult<String> {
    match format {
        ConfigFormatArg::Yaml => config
            .to_yaml()
            .map_err(|e| CliError::serialize(e.to_string())),
        ConfigFormatArg::Json => Ok(serde_json::to_string_pretty(config)? + "\n"),
    }
}

//! `tagforge config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&std::path::PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.data(&get_config_value(&config, &key)?)?,

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_config_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

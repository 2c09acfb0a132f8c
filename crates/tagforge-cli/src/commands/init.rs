//! `tagforge init`: create a configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, PROJECT_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write a configuration file holding the defaults.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(args.global)?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_config(&config_path, args.project_id)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

fn target_path(global: bool) -> CliResult<PathBuf> {
    if !global {
        return Ok(PathBuf::from(PROJECT_CONFIG_FILE));
    }
    AppConfig::user_config_path().ok_or_else(|| CliError::ConfigError {
        message: "No home directory to place the user configuration in".into(),
        source: None,
    })
}

fn write_config(path: &Path, project_id: Option<String>) -> CliResult<()> {
    let mut config = AppConfig::default();
    config.project.id = project_id;

    let toml = toml::to_string_pretty(&config)
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PROJECT_CONFIG_FILE);

        write_config(&path, Some("myfaces-api".into())).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.project.id.as_deref(), Some("myfaces-api"));
        assert_eq!(loaded.generate.output_dir, AppConfig::default().generate.output_dir);
    }

    #[test]
    fn local_target_is_project_file() {
        assert_eq!(target_path(false).unwrap(), PathBuf::from(PROJECT_CONFIG_FILE));
    }
}

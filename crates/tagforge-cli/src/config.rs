//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TAGFORGE_<SECTION>__<KEY>`, e.g.
//!    `TAGFORGE_PROJECT__ID=myfaces-api`
//! 3. `--config FILE`, or `./tagforge.toml` when present
//! 4. The user configuration file (see [`AppConfig::user_config_path`])
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use tagforge_core::domain::{DEFAULT_METADATA_FILE, UnresolvedPolicy};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "tagforge.toml";

const ENV_PREFIX: &str = "TAGFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub generate: GenerateConfig,
    pub flatten: FlattenConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Default model id for `generate`.
    pub id: Option<String>,
}

/// Defaults for `tagforge generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub build_dir: PathBuf,
    pub metadata_file: String,
    pub template_dir: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub jsf_version: Option<String>,
    pub template: Option<String>,
    pub cache: bool,
    /// Defaults to `<build_dir>/tagforge-cache.toml`.
    pub cache_file: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("target/classes"),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            template_dir: PathBuf::from("src/main/resources/META-INF"),
            source_roots: vec![PathBuf::from("src/main/java")],
            output_dir: PathBuf::from("target/generated-sources/myfaces"),
            jsf_version: None,
            template: None,
            cache: true,
            cache_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// `fail` or `skip` for parents and interfaces missing from the model.
    pub unresolved: UnresolvedPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(user) = Self::user_config_path() {
            builder = builder.add_source(toml_file(&user).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path).required(true)),
            None => builder.add_source(toml_file(Path::new(PROJECT_CONFIG_FILE)).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// User-level configuration file, e.g. `~/.config/tagforge/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "tagforge", "tagforge")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file that most specifically configures this invocation.
    ///
    /// The explicit `--config` path, else `./tagforge.toml` when present,
    /// else the user configuration path.
    pub fn active_config_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(PROJECT_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::user_config_path().unwrap_or(local)
    }

    /// Look up a dotted key such as `generate.output_dir`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = toml::Value::try_from(self).ok()?;
        let found = key.split('.').try_fold(&value, |v, part| v.get(part))?;
        Some(match found {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

fn toml_file(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path).format(config::FileFormat::Toml)
}

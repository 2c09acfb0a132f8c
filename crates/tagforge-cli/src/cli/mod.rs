//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tagforge",
    bin_name = "tagforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "JSF component metadata flattening and tag class generation",
    long_about = "Tagforge reads JSF component metadata, resolves inherited \
                  properties, and generates JSP tag classes from templates.",
    after_help = "EXAMPLES:\n\
        \x20 tagforge generate --build-dir target/classes --model-id myfaces-api\n\
        \x20 tagforge flatten target/classes/META-INF/myfaces-metadata.xml -o flat.xml\n\
        \x20 tagforge list target/classes/META-INF/myfaces-metadata.xml --format json\n\
        \x20 tagforge completions bash > /usr/share/bash-completion/completions/tagforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate tag classes from component metadata.
    #[command(
        visible_alias = "gen",
        about = "Generate JSP tag classes",
        after_help = "EXAMPLES:\n\
            \x20 tagforge generate --model-id myfaces-api\n\
            \x20 tagforge generate --jsf-version 1.2 --package-prefix org.apache.myfaces.taglib\n\
            \x20 tagforge generate --template myTag.tmpl --template-dir src/main/templates --force"
    )]
    Generate(GenerateArgs),

    /// Flatten a metadata file and write the result.
    #[command(
        about = "Resolve inherited properties in a metadata file",
        after_help = "EXAMPLES:\n\
            \x20 tagforge flatten myfaces-metadata.xml\n\
            \x20 tagforge flatten myfaces-metadata.xml --output flat.xml --skip-unresolved"
    )]
    Flatten(FlattenArgs),

    /// List the components of a metadata file.
    #[command(
        visible_alias = "ls",
        about = "List components in a metadata file",
        after_help = "EXAMPLES:\n\
            \x20 tagforge list myfaces-metadata.xml\n\
            \x20 tagforge list myfaces-metadata.xml --flatten --format csv"
    )]
    List(ListArgs),

    /// Initialise a Tagforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tagforge init --project-id myfaces-api   # ./tagforge.toml\n\
            \x20 tagforge init --global                   # user configuration"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tagforge completions bash > ~/.local/share/bash-completion/completions/tagforge\n\
            \x20 tagforge completions zsh  > ~/.zfunc/_tagforge\n\
            \x20 tagforge completions fish > ~/.config/fish/completions/tagforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Tagforge configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tagforge config get project.id\n\
            \x20 tagforge config list\n\
            \x20 tagforge config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `tagforge generate`.
///
/// Every option falls back to the `[generate]` table of the configuration.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory holding the compiled classes and the metadata file.
    #[arg(long = "build-dir", value_name = "DIR", help = "Build output directory")]
    pub build_dir: Option<PathBuf>,

    /// Metadata file, relative to the build directory.
    #[arg(
        long = "metadata-file",
        value_name = "PATH",
        help = "Metadata file relative to the build directory"
    )]
    pub metadata_file: Option<String>,

    /// Directory searched for templates before the built-in ones.
    #[arg(long = "template-dir", value_name = "DIR", help = "Template directory")]
    pub template_dir: Option<PathBuf>,

    /// Hand-written source root.  Repeatable.
    #[arg(
        long = "source-root",
        value_name = "DIR",
        help = "Hand-written source root (repeatable)"
    )]
    pub source_roots: Vec<PathBuf>,

    /// Root directory for generated tag classes.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory for generated sources"
    )]
    pub output_dir: Option<PathBuf>,

    /// Model ids to generate for.  Repeatable; defaults to `project.id`.
    #[arg(long = "model-id", value_name = "ID", help = "Model id to include (repeatable)")]
    pub model_ids: Vec<String>,

    /// Only generate tag classes whose package starts with this prefix.
    #[arg(long = "package-prefix", value_name = "PREFIX")]
    pub package_prefix: Option<String>,

    /// Only generate components whose type starts with this prefix.
    #[arg(long = "type-prefix", value_name = "PREFIX")]
    pub type_prefix: Option<String>,

    /// Log per-component failures and keep going.
    #[arg(long = "force", help = "Continue past failing components")]
    pub force: bool,

    /// JSF version, selects the default template.
    #[arg(long = "jsf-version", value_name = "VERSION", help = "JSF version (1.1, 1.2, 2.0)")]
    pub jsf_version: Option<String>,

    /// Template file name, overrides the JSF version default.
    #[arg(long = "template", value_name = "NAME", help = "Template file name")]
    pub template: Option<String>,

    /// Regenerate everything, ignoring and not updating the cache.
    #[arg(long = "no-cache", help = "Disable the generation cache")]
    pub no_cache: bool,

    /// Generation cache file.
    #[arg(long = "cache-file", value_name = "FILE", help = "Generation cache file")]
    pub cache_file: Option<PathBuf>,
}

// ── flatten ───────────────────────────────────────────────────────────────────

/// Arguments for `tagforge flatten`.
#[derive(Debug, Args)]
pub struct FlattenArgs {
    /// Metadata file to read.
    #[arg(value_name = "METADATA", help = "Metadata file to flatten")]
    pub input: PathBuf,

    /// Write here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    /// Warn about unresolved parents and interfaces instead of failing.
    #[arg(long = "skip-unresolved", help = "Skip unresolved ancestors")]
    pub skip_unresolved: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `tagforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Metadata file to read.
    #[arg(value_name = "METADATA", help = "Metadata file to list")]
    pub input: PathBuf,

    /// Flatten before counting properties.
    #[arg(long = "flatten", help = "Include inherited properties")]
    pub flatten: bool,

    /// Only components of this model id.
    #[arg(long = "model-id", value_name = "ID", help = "Filter by model id")]
    pub model_id: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One class name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tagforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user configuration directory instead of `./tagforge.toml`.
    #[arg(long = "global", help = "Create user-level configuration")]
    pub global: bool,

    /// Model id recorded as `project.id`.
    #[arg(long = "project-id", value_name = "ID", help = "Project model id")]
    pub project_id: Option<String>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tagforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tagforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.output_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

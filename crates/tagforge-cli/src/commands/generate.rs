//! Implementation of the `tagforge generate` command.
//!
//! Merges the flags over the `[generate]` configuration, wires the local
//! adapters into [`TagGenerationService`] and prints the report.

use std::path::PathBuf;

use tracing::{debug, instrument};

use tagforge_adapters::{
    DirectoryTemplateSource, LocalFilesystem, SimpleRenderer, TomlCacheStore,
    metadata_xml::metadata_path,
};
use tagforge_core::{
    application::{GenerateOptions, GenerationReport, TagGenerationService},
    domain::{GenerationFilter, JsfVersion, template_name},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const CACHE_FILE_NAME: &str = "tagforge-cache.toml";

/// Everything a generation run needs, after flags and config are merged.
#[derive(Debug)]
struct GenerateSettings {
    metadata_path: PathBuf,
    template_dir: PathBuf,
    cache_file: PathBuf,
    options: GenerateOptions,
}

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = resolve_settings(args, &config)?;
    debug!(?settings, "Generation settings resolved");

    super::require_metadata(&settings.metadata_path)?;

    let fs = LocalFilesystem::new();
    let service = TagGenerationService::new(
        super::local_metadata_service(),
        Box::new(DirectoryTemplateSource::new(fs, Some(settings.template_dir))),
        Box::new(SimpleRenderer::new()),
        Box::new(fs),
        Box::new(TomlCacheStore::new(fs, settings.cache_file)),
    );

    let report = service.execute(&settings.metadata_path, &settings.options)?;
    print_report(&report, &settings.options, &output)?;
    Ok(())
}

fn resolve_settings(args: GenerateArgs, config: &AppConfig) -> CliResult<GenerateSettings> {
    let defaults = &config.generate;

    let model_ids = if args.model_ids.is_empty() {
        config.project.id.iter().cloned().collect()
    } else {
        args.model_ids
    };
    if model_ids.is_empty() {
        return Err(CliError::MissingModelId);
    }

    let version = args
        .jsf_version
        .as_deref()
        .or(defaults.jsf_version.as_deref())
        .map(str::parse::<JsfVersion>)
        .transpose()
        .map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;
    let template = template_name(
        args.template.as_deref().or(defaults.template.as_deref()),
        version,
    );

    let build_dir = args.build_dir.unwrap_or_else(|| defaults.build_dir.clone());
    let metadata_file = args
        .metadata_file
        .unwrap_or_else(|| defaults.metadata_file.clone());
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| defaults.output_dir.clone());
    let output_root = std::path::absolute(&output_dir)
        .with_cli_context(|| format!("Cannot resolve output directory '{}'", output_dir.display()))?;

    let mut filter = GenerationFilter::for_models(model_ids);
    if let Some(prefix) = args.package_prefix {
        filter = filter.with_package_prefix(prefix);
    }
    if let Some(prefix) = args.type_prefix {
        filter = filter.with_type_prefix(prefix);
    }

    let source_roots = if args.source_roots.is_empty() {
        defaults.source_roots.clone()
    } else {
        args.source_roots
    };

    let mut options = GenerateOptions::new(filter, template, output_root)
        .with_force(args.force)
        .with_caching(defaults.cache && !args.no_cache)
        .with_unresolved(config.flatten.unresolved);
    for root in source_roots {
        options = options.with_source_root(root);
    }

    let cache_file = args
        .cache_file
        .or_else(|| defaults.cache_file.clone())
        .unwrap_or_else(|| build_dir.join(CACHE_FILE_NAME));

    Ok(GenerateSettings {
        metadata_path: metadata_path(&build_dir, &metadata_file),
        template_dir: args
            .template_dir
            .unwrap_or_else(|| defaults.template_dir.clone()),
        cache_file,
        options,
    })
}

fn print_report(
    report: &GenerationReport,
    options: &GenerateOptions,
    output: &OutputManager,
) -> CliResult<()> {
    if report.up_to_date {
        output.info("All tag classes are up to date")?;
        return Ok(());
    }

    for path in &report.generated {
        output.print(&format!("  {}", path.display()))?;
    }
    for tag_class in &report.skipped_existing {
        output.info(&format!("{tag_class} exists in a source root, not generated"))?;
    }
    for (tag_class, reason) in &report.failed {
        output.warning(&format!("{tag_class} failed: {reason}"))?;
    }

    output.success(&format!(
        "Generated {} tag class(es) in {} using {}",
        report.generated.len(),
        options.output_root.display(),
        options.template_name,
    ))?;
    Ok(())
}

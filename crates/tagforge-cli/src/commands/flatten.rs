//! `tagforge flatten`: resolve inherited properties and write the model.

use tracing::{info, instrument};

use tagforge_adapters::metadata_xml::write_model;
use tagforge_core::domain::UnresolvedPolicy;

use crate::{cli::FlattenArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: FlattenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    super::require_metadata(&args.input)?;

    let policy = if args.skip_unresolved {
        UnresolvedPolicy::Skip
    } else {
        config.flatten.unresolved
    };

    let service = super::local_metadata_service();
    let (model, report) = service.load_flattened(&args.input, policy)?;
    info!(
        components = report.components,
        copied = report.properties_copied,
        overrides = report.overrides,
        skipped = report.unresolved_skipped,
        "Model flattened"
    );

    match args.output {
        Some(path) => {
            service.save(&model, &path)?;
            output.success(&format!(
                "Flattened {} component(s) into {}",
                report.components,
                path.display()
            ))?;
        }
        None => output.data(&write_model(&model))?,
    }

    Ok(())
}

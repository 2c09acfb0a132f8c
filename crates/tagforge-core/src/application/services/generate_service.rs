//! Generate Service - main application orchestrator.
//!
//! This service coordinates the tag class generation workflow:
//! 1. Load and flatten the metadata model
//! 2. Select the components that need a generated tag class
//! 3. Skip the run when every output is current against the cache
//! 4. Render the template per component and write the result
//!
//! Per-component failures abort the run unless `force` is set.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CacheStore, Filesystem, ResolvedTemplate, TemplateOrigin, TemplateRenderer,
            TemplateSource,
        },
        services::MetadataService,
    },
    domain::{
        ComponentMeta, GenerationCache, GenerationFilter, Model, RelativePath, RenderContext,
        UnresolvedPolicy,
    },
    error::TagforgeResult,
};

/// Inputs of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub filter: GenerationFilter,
    /// Log and continue when one component fails.
    pub force: bool,
    pub template_name: String,
    /// Roots of hand-written sources. A tag class found here is not generated.
    pub source_roots: Vec<PathBuf>,
    pub output_root: PathBuf,
    pub caching: bool,
    pub unresolved: UnresolvedPolicy,
}

impl GenerateOptions {
    pub fn new(
        filter: GenerationFilter,
        template_name: impl Into<String>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filter,
            force: false,
            template_name: template_name.into(),
            source_roots: Vec::new(),
            output_root: output_root.into(),
            caching: true,
            unresolved: UnresolvedPolicy::default(),
        }
    }

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_roots.push(root.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in model order.
    pub generated: Vec<PathBuf>,
    /// Tag classes left alone because a hand-written source exists.
    pub skipped_existing: Vec<String>,
    /// Components rejected by the filter.
    pub skipped_filtered: usize,
    /// `(tag class, reason)` for components that failed under `force`.
    pub failed: Vec<(String, String)>,
    /// Nothing was generated because every output was current.
    pub up_to_date: bool,
}

/// A component selected for generation with its output file.
struct Candidate<'m> {
    component: &'m ComponentMeta,
    tag_class: &'m str,
    output: PathBuf,
}

/// Tag class generation service.
pub struct TagGenerationService {
    metadata: MetadataService,
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    cache_store: Box<dyn CacheStore>,
}

impl TagGenerationService {
    pub fn new(
        metadata: MetadataService,
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        cache_store: Box<dyn CacheStore>,
    ) -> Self {
        Self {
            metadata,
            templates,
            renderer,
            filesystem,
            cache_store,
        }
    }

    /// Generate tag classes for the model stored at `metadata_path`.
    #[instrument(
        skip_all,
        fields(
            metadata = %metadata_path.display(),
            template = %options.template_name,
            output = %options.output_root.display()
        )
    )]
    pub fn execute(
        &self,
        metadata_path: &Path,
        options: &GenerateOptions,
    ) -> TagforgeResult<GenerationReport> {
        let (model, flattened) = self
            .metadata
            .load_flattened(metadata_path, options.unresolved)?;
        debug!(
            copied = flattened.properties_copied,
            overrides = flattened.overrides,
            "Model flattened"
        );

        let metadata_mtime = self.filesystem.modified_millis(metadata_path).unwrap_or(0);

        let mut cache = if options.caching {
            self.cache_store.load()?
        } else {
            GenerationCache::new()
        };

        let report = self.generate(&model, &mut cache, metadata_mtime, options)?;

        if options.caching && !report.up_to_date {
            self.cache_store.store(&cache)?;
        }

        info!(
            generated = report.generated.len(),
            skipped_existing = report.skipped_existing.len(),
            skipped_filtered = report.skipped_filtered,
            failed = report.failed.len(),
            up_to_date = report.up_to_date,
            "Generation completed"
        );
        Ok(report)
    }

    /// Generate tag classes for an already flattened model.
    ///
    /// Cache entries for written files are recorded with `metadata_mtime`.
    pub fn generate(
        &self,
        model: &Model,
        cache: &mut GenerationCache,
        metadata_mtime: u64,
        options: &GenerateOptions,
    ) -> TagforgeResult<GenerationReport> {
        let mut report = GenerationReport::default();

        let candidates = self.select_candidates(model, options, &mut report)?;
        if candidates.is_empty() {
            debug!("No tag classes selected");
            return Ok(report);
        }

        let template = match self.templates.resolve(&options.template_name) {
            Ok(template) => template,
            Err(e) if options.force => {
                error!(
                    template = %options.template_name,
                    error = %e,
                    "Template unavailable, continuing"
                );
                for candidate in &candidates {
                    report
                        .failed
                        .push((candidate.tag_class.to_string(), e.to_string()));
                }
                return Ok(report);
            }
            Err(e) => return Err(e),
        };

        if options.caching && self.is_up_to_date(&candidates, &template, cache, metadata_mtime) {
            info!("All tag classes are up to date");
            report.up_to_date = true;
            return Ok(report);
        }

        for candidate in &candidates {
            match self.generate_one(candidate, &template) {
                Ok(()) => {
                    cache.record(cache_key(&candidate.output), metadata_mtime);
                    report.generated.push(candidate.output.clone());
                }
                Err(e) if options.force => {
                    error!(
                        tag_class = candidate.tag_class,
                        error = %e,
                        "Generation failed, continuing"
                    );
                    report
                        .failed
                        .push((candidate.tag_class.to_string(), e.to_string()));
                }
                Err(e) => {
                    return Err(ApplicationError::GenerationFailed {
                        tag_class: candidate.tag_class.to_string(),
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }

        if let TemplateOrigin::Directory(path) = &template.origin {
            if let Some(modified) = self.filesystem.modified_millis(path) {
                cache.record(cache_key(path), modified);
            }
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn select_candidates<'m>(
        &self,
        model: &'m Model,
        options: &GenerateOptions,
        report: &mut GenerationReport,
    ) -> TagforgeResult<Vec<Candidate<'m>>> {
        let mut candidates = Vec::new();

        for component in model.components() {
            let Some(tag_class) = component.tag_class.as_deref() else {
                continue;
            };

            if !options.filter.accepts(component) {
                debug!(tag_class, "Filtered out");
                report.skipped_filtered += 1;
                continue;
            }

            let relative = match RelativePath::for_java_class(tag_class) {
                Ok(relative) => relative,
                Err(e) if options.force => {
                    error!(tag_class, error = %e, "Invalid tag class, continuing");
                    report.failed.push((tag_class.to_string(), e.to_string()));
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Some(root) = options
                .source_roots
                .iter()
                .find(|root| self.filesystem.exists(&root.join(&relative)))
            {
                info!(
                    tag_class,
                    root = %root.display(),
                    "Hand-written tag class found, skipping"
                );
                report.skipped_existing.push(tag_class.to_string());
                continue;
            }

            candidates.push(Candidate {
                component,
                tag_class,
                output: options.output_root.join(relative),
            });
        }

        Ok(candidates)
    }

    fn is_up_to_date(
        &self,
        candidates: &[Candidate<'_>],
        template: &ResolvedTemplate,
        cache: &GenerationCache,
        metadata_mtime: u64,
    ) -> bool {
        if candidates.is_empty() {
            return false;
        }

        let outputs_current = candidates.iter().all(|c| {
            cache.is_current(&cache_key(&c.output), metadata_mtime)
                && self.filesystem.exists(&c.output)
        });

        let template_current = match &template.origin {
            TemplateOrigin::Builtin => true,
            TemplateOrigin::Directory(path) => self
                .filesystem
                .modified_millis(path)
                .is_some_and(|modified| cache.is_current(&cache_key(path), modified)),
        };

        outputs_current && template_current
    }

    /// Render first so a failed render leaves no partial file behind.
    fn generate_one(
        &self,
        candidate: &Candidate<'_>,
        template: &ResolvedTemplate,
    ) -> TagforgeResult<()> {
        let context = RenderContext::for_component(candidate.component);
        let source = self.renderer.render(&template.text, &context)?;

        if let Some(parent) = candidate.output.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&candidate.output, &source)?;

        debug!(path = %candidate.output.display(), "Tag class written");
        Ok(())
    }
}

fn cache_key(path: &Path) -> String {
    path.display().to_string()
}

//! Metadata Service - load, flatten and save the metadata model.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::ModelRepository,
    domain::{DomainValidator as validator, FlattenReport, Model, UnresolvedPolicy},
    error::TagforgeResult,
};

/// Service for metadata model operations.
pub struct MetadataService {
    repository: Box<dyn ModelRepository>,
}

impl MetadataService {
    pub fn new(repository: Box<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    /// Load and validate a model.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> TagforgeResult<Model> {
        let model = self.repository.load(path)?;
        validator::validate_model(&model)?;
        info!(
            components = model.component_count(),
            converters = model.converters().len(),
            validators = model.validators().len(),
            render_kits = model.render_kits().len(),
            "Metadata loaded"
        );
        Ok(model)
    }

    /// Load a model and flatten its component properties.
    pub fn load_flattened(
        &self,
        path: &Path,
        policy: UnresolvedPolicy,
    ) -> TagforgeResult<(Model, FlattenReport)> {
        let mut model = self.load(path)?;
        let report = model.flatten(policy)?;
        Ok((model, report))
    }

    pub fn save(&self, model: &Model, path: &Path) -> TagforgeResult<()> {
        self.repository.save(model, path)
    }
}

//! Metadata XML codec and the model repository built on it.
//!
//! The document root is `<model>` with one child element per entity:
//! `<component>`, `<converter>`, `<validator>` and `<renderKit>`. Writing
//! and reading agree on the element vocabulary, so a written model reads
//! back with the same entities, field values and interface order.

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};

use tagforge_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModelRepository},
    },
    domain::{DomainError, Model},
    error::{TagforgeError, TagforgeResult},
};

pub use reader::read_model;
pub use writer::{XmlWriter, write_model};

/// Failure to read a metadata document.
#[derive(Debug, Error)]
pub enum MetadataXmlError {
    #[error(transparent)]
    Parse(#[from] roxmltree::Error),

    #[error("expected <model> root element, found <{0}>")]
    UnexpectedRoot(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl MetadataXmlError {
    fn into_tagforge(self, path: &Path) -> TagforgeError {
        match self {
            Self::Domain(e) => e.into(),
            other => ApplicationError::MetadataParse {
                path: path.to_path_buf(),
                reason: other.to_string(),
            }
            .into(),
        }
    }
}

/// [`ModelRepository`] reading and writing metadata XML files.
pub struct XmlModelRepository<F: Filesystem> {
    filesystem: F,
}

impl<F: Filesystem> XmlModelRepository<F> {
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }
}

impl<F: Filesystem> ModelRepository for XmlModelRepository<F> {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> TagforgeResult<Model> {
        let text = self.filesystem.read_to_string(path)?;
        read_model(&text).map_err(|e| e.into_tagforge(path))
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn save(&self, model: &Model, path: &Path) -> TagforgeResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &write_model(model))?;
        info!(components = model.component_count(), "Metadata written");
        Ok(())
    }
}

/// Default metadata location below a build directory.
pub fn metadata_path(build_dir: &Path, metadata_file: &str) -> PathBuf {
    build_dir.join(metadata_file)
}

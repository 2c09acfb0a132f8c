//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tagforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{GenerationCache, Model, RenderContext};
use crate::error::TagforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tagforge_adapters::filesystem::LocalFilesystem` (production)
/// - `tagforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TagforgeResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> TagforgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> TagforgeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Last modification time in milliseconds since the epoch, `None` when
    /// the path does not exist.
    fn modified_millis(&self, path: &Path) -> Option<u64>;
}

/// Port for loading and storing the metadata model.
///
/// Implemented by `tagforge_adapters::XmlModelRepository`.
#[cfg_attr(test, mockall::automock)]
pub trait ModelRepository: Send + Sync {
    fn load(&self, path: &Path) -> TagforgeResult<Model>;

    fn save(&self, model: &Model, path: &Path) -> TagforgeResult<()>;
}

/// Where a resolved template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// A file in the configured template directory.
    Directory(PathBuf),
    /// Compiled into the binary.
    Builtin,
}

/// A template ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub name: String,
    pub text: String,
    pub origin: TemplateOrigin,
}

/// Port for looking up templates by name.
///
/// Implemented by `tagforge_adapters::DirectoryTemplateSource`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    fn resolve(&self, name: &str) -> TagforgeResult<ResolvedTemplate>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `tagforge_adapters::renderer::SimpleRenderer` (Handlebars, strict mode)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with the variables bound in `context`.
    fn render(&self, template: &str, context: &RenderContext) -> TagforgeResult<String>;
}

/// Port for persisting the generation cache between runs.
///
/// Implemented by `tagforge_adapters::TomlCacheStore`.
#[cfg_attr(test, mockall::automock)]
pub trait CacheStore: Send + Sync {
    /// Load the cache; a missing store yields an empty cache.
    fn load(&self) -> TagforgeResult<GenerationCache>;

    fn store(&self, cache: &GenerationCache) -> TagforgeResult<()>;
}

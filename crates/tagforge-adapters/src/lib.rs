//! Infrastructure adapters for Tagforge.
//!
//! This crate implements the ports defined in `tagforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod cache_store;
pub mod filesystem;
pub mod metadata_xml;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use cache_store::TomlCacheStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use metadata_xml::{MetadataXmlError, XmlModelRepository};
pub use renderer::SimpleRenderer;
pub use template_source::DirectoryTemplateSource;

//! Application layer for Tagforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (MetadataService, TagGenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! metadata rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateOptions, GenerationReport, MetadataService, TagGenerationService};

pub use ports::{
    CacheStore, Filesystem, ModelRepository, ResolvedTemplate, TemplateOrigin, TemplateRenderer,
    TemplateSource,
};

pub use error::ApplicationError;

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tagforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and modification times
//!   - `ModelRepository`: Metadata load/save
//!   - `TemplateSource`: Template lookup by name
//!   - `TemplateRenderer`: Template rendering
//!   - `CacheStore`: Generation cache persistence

pub mod output;

pub use output::{
    CacheStore, Filesystem, ModelRepository, ResolvedTemplate, TemplateOrigin, TemplateRenderer,
    TemplateSource,
};

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "flatten a metadata file" or "generate tag classes".

pub mod generate_service;
pub mod metadata_service;

pub use generate_service::{GenerateOptions, GenerationReport, TagGenerationService};
pub use metadata_service::MetadataService;

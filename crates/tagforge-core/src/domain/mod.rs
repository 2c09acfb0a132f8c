//! Core domain layer for Tagforge.
//!
//! This module contains pure metadata logic with no I/O. Loading, writing
//! and rendering are handled via ports (traits) defined in the application
//! layer.
//!
//! - **Entities**: `ClassMeta` and the four entity kinds built on it
//! - **Model**: the aggregate with class-name indices
//! - **Flatten**: inherited property propagation
//! - **Filter / cache / value objects**: inputs to generation

pub mod cache;
pub mod entities;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod model;
pub mod value_objects;

mod validation;

pub use cache::GenerationCache;
pub use entities::{
    ClassMeta, ComponentMeta, ConverterMeta, JsfEntity, PropertyMeta, RelativePath, RenderContext,
    RenderKitMeta, ValidatorMeta,
};
pub use error::{DomainError, ErrorCategory};
pub use filter::GenerationFilter;
pub use flatten::{FlattenReport, Flattener, UnresolvedPolicy};
pub use model::Model;
pub use validation::DomainValidator;
pub use value_objects::{
    DEFAULT_METADATA_FILE, JsfVersion, TAG_TEMPLATE_11, TAG_TEMPLATE_12, template_name,
};

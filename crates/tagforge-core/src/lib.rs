//! Tagforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Tagforge
//! JSF tag class generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          tagforge-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (MetadataService, TagGenerationService) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ModelRepository, Template  │
//! │  Source/Renderer, CacheStore)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tagforge-adapters (Infrastructure)   │
//! │ (XmlModelRepository, LocalFilesystem..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Model, ClassMeta, ComponentMeta,       │
//! │  Flattener, GenerationFilter)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tagforge_core::domain::{ClassMeta, ComponentMeta, Model, PropertyMeta, UnresolvedPolicy};
//!
//! let mut model = Model::new();
//! model
//!     .add_component(ComponentMeta::new(ClassMeta::new("a.Button").with_parent("a.Base")))
//!     .unwrap();
//! model
//!     .add_component(
//!         ComponentMeta::new(ClassMeta::new("a.Base")).with_property(PropertyMeta::new("id")),
//!     )
//!     .unwrap();
//!
//! model.flatten(UnresolvedPolicy::Fail).unwrap();
//! assert!(model.find_component_by_class_name("a.Button").unwrap().has_property("id"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerationReport, MetadataService, TagGenerationService,
        ports::{
            CacheStore, Filesystem, ModelRepository, ResolvedTemplate, TemplateOrigin,
            TemplateRenderer, TemplateSource,
        },
    };
    pub use crate::domain::{
        ClassMeta, ComponentMeta, ConverterMeta, FlattenReport, GenerationCache,
        GenerationFilter, JsfEntity, JsfVersion, Model, PropertyMeta, RenderContext,
        RenderKitMeta, UnresolvedPolicy, ValidatorMeta,
    };
    pub use crate::error::{TagforgeError, TagforgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod artifacts;
pub mod class_meta;
pub mod common;
pub mod component_meta;
pub mod property_meta;
pub mod render_context;

pub use artifacts::{ConverterMeta, RenderKitMeta, ValidatorMeta};
pub use class_meta::ClassMeta;
pub use common::RelativePath;
pub use component_meta::ComponentMeta;
pub use property_meta::PropertyMeta;
pub use render_context::RenderContext;

/// Shared behaviour of every entity kind held by a
/// [`Model`](crate::domain::Model).
pub trait JsfEntity {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    fn class_meta(&self) -> &ClassMeta;

    fn class_meta_mut(&mut self) -> &mut ClassMeta;

    fn class_name(&self) -> &str {
        self.class_meta().class_name()
    }
}

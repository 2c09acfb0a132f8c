//! Metadata common to every JSF entity description.

use serde::{Deserialize, Serialize};

/// Identity and ancestry of one JSF entity (component, converter, validator,
/// render kit).
///
/// The parent/interface links describe a simplified inheritance tree: only
/// annotated classes take part, so `parent_class_name` may skip over plain
/// Java classes. `super_class_name` records the real Java superclass when it
/// differs, which the generated code needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassMeta {
    class_name: String,
    parent_class_name: Option<String>,
    super_class_name: Option<String>,
    interface_class_names: Vec<String>,
    class_source: Option<String>,
    model_id: Option<String>,
}

impl ClassMeta {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_class_name = Some(parent.into());
        self
    }

    pub fn with_super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class_name = Some(super_class.into());
        self
    }

    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interface_class_names.push(name.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_class_source(mut self, source: impl Into<String>) -> Self {
        self.class_source = Some(source.into());
        self
    }

    /// Fully qualified name of the class implementing the entity.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    /// Nearest annotated ancestor, if any.
    pub fn parent_class_name(&self) -> Option<&str> {
        self.parent_class_name.as_deref()
    }

    pub fn set_parent_class_name(&mut self, parent: Option<String>) {
        self.parent_class_name = parent;
    }

    /// Real Java superclass of the annotated class.
    ///
    /// Falls back to [`Self::parent_class_name`] when no explicit value was
    /// recorded.
    pub fn super_class_name(&self) -> Option<&str> {
        self.super_class_name
            .as_deref()
            .or(self.parent_class_name.as_deref())
    }

    /// The explicitly recorded superclass, without the parent fallback.
    pub fn declared_super_class_name(&self) -> Option<&str> {
        self.super_class_name.as_deref()
    }

    pub fn set_super_class_name(&mut self, super_class: Option<String>) {
        self.super_class_name = super_class;
    }

    /// Annotated interfaces, in declaration order.
    pub fn interface_class_names(&self) -> &[String] {
        &self.interface_class_names
    }

    pub fn add_interface_class_name(&mut self, name: impl Into<String>) {
        self.interface_class_names.push(name.into());
    }

    pub fn class_source(&self) -> Option<&str> {
        self.class_source.as_deref()
    }

    pub fn set_class_source(&mut self, source: Option<String>) {
        self.class_source = source;
    }

    /// Group (build module) this entry was contributed by.
    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn set_model_id(&mut self, model_id: Option<String>) {
        self.model_id = model_id;
    }

    /// Package part of the class name; empty for the default package.
    pub fn package_name(&self) -> &str {
        package_of(&self.class_name)
    }

    /// Class name without its package.
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.class_name)
    }

    /// Parent link followed by interface links, in walk order.
    pub fn ancestor_references(&self) -> impl Iterator<Item = &str> {
        self.parent_class_name
            .as_deref()
            .into_iter()
            .chain(self.interface_class_names.iter().map(String::as_str))
    }
}

pub(crate) fn package_of(class_name: &str) -> &str {
    class_name.rfind('.').map_or("", |idx| &class_name[..idx])
}

pub(crate) fn simple_name_of(class_name: &str) -> &str {
    class_name
        .rfind('.')
        .map_or(class_name, |idx| &class_name[idx + 1..])
}

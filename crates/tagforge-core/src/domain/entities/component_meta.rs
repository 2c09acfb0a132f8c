//! Component metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::class_meta::{ClassMeta, package_of, simple_name_of};
use super::property_meta::PropertyMeta;
use super::JsfEntity;

/// Description of a JSF UI component and the tag class that exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentMeta {
    class: ClassMeta,
    /// Tag name, e.g. `h:commandButton`.
    pub name: Option<String>,
    pub component_type: Option<String>,
    pub family: Option<String>,
    pub renderer_type: Option<String>,
    pub tag_class: Option<String>,
    pub tag_package: Option<String>,
    pub tag_super_class: Option<String>,
    pub description: Option<String>,
    properties: BTreeMap<String, PropertyMeta>,
}

impl ComponentMeta {
    pub fn new(class: ClassMeta) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    pub fn with_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    pub fn with_tag_class(mut self, tag_class: impl Into<String>) -> Self {
        self.tag_class = Some(tag_class.into());
        self
    }

    pub fn with_property(mut self, property: PropertyMeta) -> Self {
        self.add_property(property);
        self
    }

    /// Package of the generated tag class.
    ///
    /// Uses the explicit tag package when recorded, else the package part of
    /// the tag class name.
    pub fn tag_package(&self) -> Option<&str> {
        self.tag_package
            .as_deref()
            .or_else(|| self.tag_class.as_deref().map(package_of))
    }

    pub fn tag_simple_name(&self) -> Option<&str> {
        self.tag_class.as_deref().map(simple_name_of)
    }

    /// Insert a property, replacing any existing one with the same name.
    pub fn add_property(&mut self, property: PropertyMeta) {
        self.properties.insert(property.name.clone(), property);
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMeta> {
        self.properties.get(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Properties ordered by name.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyMeta> {
        self.properties.values()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl JsfEntity for ComponentMeta {
    const KIND: &'static str = "component";

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn class_meta_mut(&mut self) -> &mut ClassMeta {
        &mut self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_package_derived_from_tag_class() {
        let comp = ComponentMeta::new(ClassMeta::new("javax.faces.component.html.HtmlCommandButton"))
            .with_tag_class("org.apache.myfaces.taglib.html.HtmlCommandButtonTag");
        assert_eq!(comp.tag_package(), Some("org.apache.myfaces.taglib.html"));
        assert_eq!(comp.tag_simple_name(), Some("HtmlCommandButtonTag"));
    }

    #[test]
    fn explicit_tag_package_wins() {
        let mut comp = ComponentMeta::new(ClassMeta::new("a.B")).with_tag_class("x.y.BTag");
        comp.tag_package = Some("custom.pkg".into());
        assert_eq!(comp.tag_package(), Some("custom.pkg"));
    }

    #[test]
    fn properties_are_ordered_by_name() {
        let comp = ComponentMeta::new(ClassMeta::new("a.B"))
            .with_property(PropertyMeta::new("value"))
            .with_property(PropertyMeta::new("action"))
            .with_property(PropertyMeta::new("immediate"));
        let names: Vec<_> = comp.properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["action", "immediate", "value"]);
    }

    #[test]
    fn add_property_replaces_same_name() {
        let mut comp = ComponentMeta::new(ClassMeta::new("a.B"));
        comp.add_property(PropertyMeta::new("type"));
        comp.add_property(PropertyMeta::new("type").with_default("submit"));
        assert_eq!(comp.property_count(), 1);
        assert_eq!(
            comp.property("type").and_then(|p| p.default_value.as_deref()),
            Some("submit")
        );
    }
}

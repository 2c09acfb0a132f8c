//! Variables handed to a template renderer.
//!
//! A [`RenderContext`] is a **Value Object**: a flat map of dotted variable
//! names to text, plus named lists of nested contexts for repeated blocks.
//!
//! ## Component variables
//!
//! [`RenderContext::for_component`] binds one component:
//!
//! | Variable | Example |
//! |----------|---------|
//! | `component.className` | `javax.faces.component.html.HtmlCommandButton` |
//! | `component.simpleName` | `HtmlCommandButton` |
//! | `component.type` | `javax.faces.HtmlCommandButton` |
//! | `component.tagClass` | `org.apache.myfaces.taglib.html.HtmlCommandButtonTag` |
//! | `component.tagPackage` | `org.apache.myfaces.taglib.html` |
//! | `component.tagSimpleName` | `HtmlCommandButtonTag` |
//!
//! and the `properties` list, one entry per property with `property.name`,
//! `property.className`, `property.setterName`, `property.fieldName`,
//! `property.required`, `property.literalOnly`, `property.transient`,
//! `property.inherited`, `property.primitive`, `property.defaultValue` and
//! `property.description`.
//!
//! Absent optional values are bound to the empty string so templates can test
//! them with `{{#if ...}}`. Flags are bound to `"true"` / `"false"`.

use std::collections::HashMap;

use super::component_meta::ComponentMeta;
use super::property_meta::PropertyMeta;
use super::JsfEntity;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
    lists: HashMap<String, Vec<RenderContext>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a component and its (flattened) properties.
    pub fn for_component(component: &ComponentMeta) -> Self {
        let class = component.class_meta();
        let opt = |v: Option<&str>| v.unwrap_or_default().to_string();

        let properties = component.properties().map(Self::for_property).collect();

        Self::new()
            .with_variable("component.className", class.class_name())
            .with_variable("component.simpleName", class.simple_name())
            .with_variable("component.packageName", class.package_name())
            .with_variable("component.parentClassName", opt(class.parent_class_name()))
            .with_variable("component.superClassName", opt(class.super_class_name()))
            .with_variable("component.modelId", opt(class.model_id()))
            .with_variable("component.name", opt(component.name.as_deref()))
            .with_variable("component.type", opt(component.component_type.as_deref()))
            .with_variable("component.family", opt(component.family.as_deref()))
            .with_variable(
                "component.rendererType",
                opt(component.renderer_type.as_deref()),
            )
            .with_variable("component.tagClass", opt(component.tag_class.as_deref()))
            .with_variable("component.tagPackage", opt(component.tag_package()))
            .with_variable("component.tagSimpleName", opt(component.tag_simple_name()))
            .with_variable(
                "component.tagSuperclass",
                opt(component.tag_super_class.as_deref()),
            )
            .with_variable(
                "component.description",
                opt(component.description.as_deref()),
            )
            .with_list("properties", properties)
    }

    fn for_property(property: &PropertyMeta) -> Self {
        Self::new()
            .with_variable("property.name", property.name.as_str())
            .with_variable("property.className", property.class_name.as_str())
            .with_variable("property.setterName", property.setter_name())
            .with_variable("property.fieldName", property.field_name())
            .with_variable("property.required", property.required.to_string())
            .with_variable("property.literalOnly", property.literal_only.to_string())
            .with_variable("property.transient", property.transient.to_string())
            .with_variable("property.inherited", property.inherited.to_string())
            .with_variable("property.primitive", property.is_primitive().to_string())
            .with_variable(
                "property.defaultValue",
                property.default_value.clone().unwrap_or_default(),
            )
            .with_variable(
                "property.description",
                property.description.clone().unwrap_or_default(),
            )
    }

    /// Add a variable, consuming self. Overrides an existing binding.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Add a named list of nested contexts for repeated blocks.
    pub fn with_list(mut self, key: impl Into<String>, items: Vec<RenderContext>) -> Self {
        self.lists.insert(key.into(), items);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn list(&self, key: &str) -> Option<&[RenderContext]> {
        self.lists.get(key).map(Vec::as_slice)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn lists(&self) -> impl Iterator<Item = (&str, &[RenderContext])> {
        self.lists.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// A variable is truthy when bound, non-empty and not `"false"`.
    ///
    /// A list is truthy when it has at least one entry.
    pub fn is_truthy(&self, key: &str) -> Option<bool> {
        if let Some(value) = self.get(key) {
            return Some(!value.is_empty() && value != "false");
        }
        self.list(key).map(|items| !items.is_empty())
    }
}

//! Component property metadata.

use serde::{Deserialize, Serialize};

const DEFAULT_PROPERTY_CLASS: &str = "java.lang.String";

const JAVA_PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// One property of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMeta {
    pub name: String,
    /// Java type of the property.
    pub class_name: String,
    pub description: Option<String>,
    pub required: bool,
    /// Only literal values accepted, no expressions.
    pub literal_only: bool,
    pub transient: bool,
    pub default_value: Option<String>,
    /// Set when the flattener copied this property from an ancestor.
    pub inherited: bool,
}

impl PropertyMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: DEFAULT_PROPERTY_CLASS.to_string(),
            description: None,
            required: false,
            literal_only: false,
            transient: false,
            default_value: None,
            inherited: false,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn literal_only(mut self) -> Self {
        self.literal_only = true;
        self
    }

    pub fn is_primitive(&self) -> bool {
        JAVA_PRIMITIVES.contains(&self.class_name.as_str())
    }

    /// `styleClass` -> `setStyleClass`
    pub fn setter_name(&self) -> String {
        format!("set{}", capitalize(&self.name))
    }

    /// `styleClass` -> `_styleClass`
    pub fn field_name(&self) -> String {
        format!("_{}", self.name)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

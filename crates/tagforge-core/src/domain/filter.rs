//! Component selection for tag class generation.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ComponentMeta, JsfEntity};

/// Which components a generation run covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFilter {
    /// Model groups to include. A component without a model id never matches.
    pub model_ids: Vec<String>,
    /// Only tag classes whose package starts with this prefix.
    pub package_prefix: Option<String>,
    /// Only components whose type starts with this prefix.
    pub type_prefix: Option<String>,
}

impl GenerationFilter {
    pub fn for_models<I, S>(model_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            model_ids: model_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = Some(prefix.into());
        self
    }

    pub fn with_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = Some(prefix.into());
        self
    }

    pub fn accepts(&self, component: &ComponentMeta) -> bool {
        self.includes_model(component) && self.includes_package(component) && self.includes_type(component)
    }

    fn includes_model(&self, component: &ComponentMeta) -> bool {
        component
            .class_meta()
            .model_id()
            .is_some_and(|id| self.model_ids.iter().any(|m| m == id))
    }

    fn includes_package(&self, component: &ComponentMeta) -> bool {
        match &self.package_prefix {
            Some(prefix) => component
                .tag_package()
                .is_some_and(|pkg| pkg.starts_with(prefix.as_str())),
            None => true,
        }
    }

    fn includes_type(&self, component: &ComponentMeta) -> bool {
        match &self.type_prefix {
            Some(prefix) => component
                .component_type
                .as_deref()
                .is_some_and(|t| t.starts_with(prefix.as_str())),
            None => true,
        }
    }
}

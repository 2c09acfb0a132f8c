//! Converter, validator and render kit metadata.

use serde::{Deserialize, Serialize};

use super::JsfEntity;
use super::class_meta::ClassMeta;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConverterMeta {
    class: ClassMeta,
    pub converter_id: Option<String>,
    pub description: Option<String>,
}

impl ConverterMeta {
    pub fn new(class: ClassMeta) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }
}

impl JsfEntity for ConverterMeta {
    const KIND: &'static str = "converter";

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn class_meta_mut(&mut self) -> &mut ClassMeta {
        &mut self.class
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorMeta {
    class: ClassMeta,
    pub validator_id: Option<String>,
    pub description: Option<String>,
}

impl ValidatorMeta {
    pub fn new(class: ClassMeta) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }
}

impl JsfEntity for ValidatorMeta {
    const KIND: &'static str = "validator";

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn class_meta_mut(&mut self) -> &mut ClassMeta {
        &mut self.class
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderKitMeta {
    class: ClassMeta,
    pub render_kit_id: Option<String>,
}

impl RenderKitMeta {
    pub fn new(class: ClassMeta) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }
}

impl JsfEntity for RenderKitMeta {
    const KIND: &'static str = "render kit";

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn class_meta_mut(&mut self) -> &mut ClassMeta {
        &mut self.class
    }
}

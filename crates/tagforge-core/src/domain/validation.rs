use crate::domain::{entities::JsfEntity, error::DomainError, model::Model};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Structural checks on a freshly loaded model.
    ///
    /// Tag class names are checked when a component is selected for
    /// generation, so a bad one only matters for the components it affects.
    pub fn validate_model(model: &Model) -> Result<(), DomainError> {
        let class_names = model
            .components()
            .iter()
            .map(|c| c.class_name())
            .chain(model.converters().iter().map(|c| c.class_name()))
            .chain(model.validators().iter().map(|v| v.class_name()))
            .chain(model.render_kits().iter().map(|r| r.class_name()));

        for name in class_names {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidClassName {
                    class_name: name.to_string(),
                    reason: "class name is blank".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ClassMeta, ComponentMeta};

    #[test]
    fn malformed_tag_class_does_not_reject_the_model() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("a.B")).with_tag_class("a..BTag"))
            .unwrap();
        assert!(DomainValidator::validate_model(&model).is_ok());
    }

    #[test]
    fn rejects_blank_class_name() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("  ")))
            .unwrap();
        assert!(DomainValidator::validate_model(&model).is_err());
    }

    #[test]
    fn accepts_well_formed_model() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("a.B")).with_tag_class("a.taglib.BTag"))
            .unwrap();
        assert!(DomainValidator::validate_model(&model).is_ok());
    }
}

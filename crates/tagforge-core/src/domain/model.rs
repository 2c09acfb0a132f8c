//! The metadata aggregate.

use std::collections::BTreeMap;

use crate::domain::{
    DomainError,
    entities::{ComponentMeta, ConverterMeta, JsfEntity, RenderKitMeta, ValidatorMeta},
    flatten::{FlattenReport, Flattener, UnresolvedPolicy},
};

/// Insertion-ordered list of entities with a class-name index.
///
/// Invariant: every item is indexed, and class names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntityList<T> {
    items: Vec<T>,
    by_class: BTreeMap<String, usize>,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            by_class: BTreeMap::new(),
        }
    }
}

impl<T: JsfEntity> EntityList<T> {
    fn add(&mut self, entity: T) -> Result<(), DomainError> {
        let class_name = entity.class_name().to_string();
        if self.by_class.contains_key(&class_name) {
            return Err(DomainError::DuplicateClassName {
                kind: T::KIND,
                class_name,
            });
        }
        self.by_class.insert(class_name, self.items.len());
        self.items.push(entity);
        Ok(())
    }

    fn find(&self, class_name: &str) -> Option<&T> {
        self.index_of(class_name).map(|idx| &self.items[idx])
    }

    fn index_of(&self, class_name: &str) -> Option<usize> {
        self.by_class.get(class_name).copied()
    }
}

/// All JSF artifacts of one build run.
///
/// Built once (from XML or directly), flattened in place, then serialized or
/// handed to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    components: EntityList<ComponentMeta>,
    converters: EntityList<ConverterMeta>,
    validators: EntityList<ValidatorMeta>,
    render_kits: EntityList<RenderKitMeta>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(&mut self, component: ComponentMeta) -> Result<(), DomainError> {
        self.components.add(component)
    }

    pub fn add_converter(&mut self, converter: ConverterMeta) -> Result<(), DomainError> {
        self.converters.add(converter)
    }

    pub fn add_validator(&mut self, validator: ValidatorMeta) -> Result<(), DomainError> {
        self.validators.add(validator)
    }

    pub fn add_render_kit(&mut self, render_kit: RenderKitMeta) -> Result<(), DomainError> {
        self.render_kits.add(render_kit)
    }

    /// Components in insertion order.
    pub fn components(&self) -> &[ComponentMeta] {
        &self.components.items
    }

    pub fn converters(&self) -> &[ConverterMeta] {
        &self.converters.items
    }

    pub fn validators(&self) -> &[ValidatorMeta] {
        &self.validators.items
    }

    pub fn render_kits(&self) -> &[RenderKitMeta] {
        &self.render_kits.items
    }

    pub fn find_component_by_class_name(&self, class_name: &str) -> Option<&ComponentMeta> {
        self.components.find(class_name)
    }

    pub fn find_converter_by_class_name(&self, class_name: &str) -> Option<&ConverterMeta> {
        self.converters.find(class_name)
    }

    pub fn find_validator_by_class_name(&self, class_name: &str) -> Option<&ValidatorMeta> {
        self.validators.find(class_name)
    }

    pub fn find_render_kit_by_class_name(&self, class_name: &str) -> Option<&RenderKitMeta> {
        self.render_kits.find(class_name)
    }

    pub fn component_count(&self) -> usize {
        self.components.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.items.is_empty()
            && self.converters.items.is_empty()
            && self.validators.items.is_empty()
            && self.render_kits.items.is_empty()
    }

    /// Copy inherited properties onto every component.
    ///
    /// See [`Flattener`] for the walk order and conflict rules.
    pub fn flatten(&mut self, policy: UnresolvedPolicy) -> Result<FlattenReport, DomainError> {
        Flattener::new(self, policy).flatten()
    }

    pub(crate) fn component_index(&self, class_name: &str) -> Option<usize> {
        self.components.index_of(class_name)
    }

    pub(crate) fn component_at(&self, idx: usize) -> &ComponentMeta {
        &self.components.items[idx]
    }

    pub(crate) fn component_at_mut(&mut self, idx: usize) -> &mut ComponentMeta {
        &mut self.components.items[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClassMeta;

    #[test]
    fn lookup_matches_list() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("a.One")))
            .unwrap();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("a.Two")))
            .unwrap();

        assert_eq!(model.component_count(), 2);
        for comp in model.components() {
            let found = model.find_component_by_class_name(comp.class_name());
            assert_eq!(found, Some(comp));
        }
        assert!(model.find_component_by_class_name("a.Three").is_none());
    }

    #[test]
    fn lookup_survives_flatten() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("a.Child").with_parent("a.Base")))
            .unwrap();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("a.Base"))
                    .with_property(crate::domain::entities::PropertyMeta::new("id")),
            )
            .unwrap();

        model.flatten(UnresolvedPolicy::Fail).unwrap();

        for comp in model.components() {
            assert_eq!(model.find_component_by_class_name(comp.class_name()), Some(comp));
        }
        assert!(
            model
                .find_component_by_class_name("a.Child")
                .unwrap()
                .has_property("id")
        );
    }

    #[test]
    fn duplicate_class_name_rejected() {
        let mut model = Model::new();
        model
            .add_converter(ConverterMeta::new(ClassMeta::new("a.Conv")))
            .unwrap();
        let err = model
            .add_converter(ConverterMeta::new(ClassMeta::new("a.Conv")))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateClassName {
                kind: "converter",
                class_name: "a.Conv".into()
            }
        );
        assert_eq!(model.converters().len(), 1);
    }

    #[test]
    fn same_class_name_allowed_across_kinds() {
        let mut model = Model::new();
        model
            .add_validator(ValidatorMeta::new(ClassMeta::new("a.X")))
            .unwrap();
        model
            .add_render_kit(RenderKitMeta::new(ClassMeta::new("a.X")))
            .unwrap();
        assert!(model.find_validator_by_class_name("a.X").is_some());
        assert!(model.find_render_kit_by_class_name("a.X").is_some());
    }

    #[test]
    fn empty_model() {
        assert!(Model::new().is_empty());
    }
}

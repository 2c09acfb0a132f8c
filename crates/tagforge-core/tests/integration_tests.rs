//! Integration tests for tagforge-core.

use tagforge_core::prelude::*;
use tagforge_core::domain::DomainError;

fn component(class_name: &str) -> ComponentMeta {
    ComponentMeta::new(ClassMeta::new(class_name).with_model_id("core"))
}

fn child(class_name: &str, parent: &str) -> ComponentMeta {
    ComponentMeta::new(
        ClassMeta::new(class_name)
            .with_model_id("core")
            .with_parent(parent),
    )
}

#[test]
fn test_flatten_chain_reaches_grandparent() {
    let mut model = Model::new();
    model.add_component(child("a.A", "a.B")).unwrap();
    model.add_component(child("a.B", "a.C")).unwrap();
    model
        .add_component(component("a.C").with_property(PropertyMeta::new("styleClass")))
        .unwrap();

    let report = model.flatten(UnresolvedPolicy::Fail).unwrap();

    let a = model.find_component_by_class_name("a.A").unwrap();
    let copied = a.property("styleClass").unwrap();
    assert!(copied.inherited);
    assert_eq!(report.components, 3);
}

#[test]
fn test_flatten_twice_is_stable() {
    let mut model = Model::new();
    model
        .add_component(
            ComponentMeta::new(
                ClassMeta::new("a.Input")
                    .with_parent("a.Output")
                    .with_interface("a.Editable"),
            )
            .with_property(PropertyMeta::new("value").with_class("java.lang.Object")),
        )
        .unwrap();
    model
        .add_component(component("a.Output").with_property(PropertyMeta::new("converter")))
        .unwrap();
    model
        .add_component(component("a.Editable").with_property(PropertyMeta::new("required")))
        .unwrap();

    model.flatten(UnresolvedPolicy::Fail).unwrap();
    let first: Vec<String> = model
        .find_component_by_class_name("a.Input")
        .unwrap()
        .properties()
        .map(|p| p.name.clone())
        .collect();

    model.flatten(UnresolvedPolicy::Fail).unwrap();
    let second: Vec<String> = model
        .find_component_by_class_name("a.Input")
        .unwrap()
        .properties()
        .map(|p| p.name.clone())
        .collect();

    assert_eq!(first, vec!["converter", "required", "value"]);
    assert_eq!(first, second);
}

#[test]
fn test_unresolved_parent_fails_then_skips() {
    let build = || {
        let mut model = Model::new();
        model.add_component(child("a.Orphan", "missing.Base")).unwrap();
        model
    };

    let err = build().flatten(UnresolvedPolicy::Fail).unwrap_err();
    assert!(matches!(err, DomainError::UnresolvedAncestor { .. }));

    let report = build().flatten(UnresolvedPolicy::Skip).unwrap();
    assert_eq!(report.unresolved_skipped, 1);
}

#[test]
fn test_filter_and_render_context() {
    let mut model = Model::new();
    model
        .add_component(
            component("a.Button")
                .with_type("javax.faces.HtmlCommandButton")
                .with_tag_class("org.demo.taglib.ButtonTag")
                .with_property(PropertyMeta::new("label").required()),
        )
        .unwrap();

    let button = &model.components()[0];
    let filter = GenerationFilter::for_models(["core"]).with_package_prefix("org.demo");
    assert!(filter.accepts(button));
    assert!(!filter.clone().with_type_prefix("javax.faces.Html").accepts(&component("a.X")));

    let ctx = RenderContext::for_component(button);
    assert_eq!(ctx.get("component.tagSimpleName"), Some("ButtonTag"));
    assert_eq!(ctx.get("component.tagPackage"), Some("org.demo.taglib"));
    let properties = ctx.list("properties").unwrap();
    assert_eq!(properties[0].get("property.setterName"), Some("setLabel"));
    assert_eq!(properties[0].is_truthy("property.required"), Some(true));
}

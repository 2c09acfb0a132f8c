//! XML to metadata model.
//!
//! Each entity kind is read through a table of `(element, setter)` rules
//! applied to the entity element's children. Shared class fields are read
//! by [`CLASS_RULES`] for every kind. Unknown elements are ignored.

use roxmltree::{Document, Node};
use tracing::{debug, instrument};

use tagforge_core::domain::{
    ClassMeta, ComponentMeta, ConverterMeta, DomainError, JsfEntity, Model, PropertyMeta,
    RenderKitMeta, ValidatorMeta,
};

use super::MetadataXmlError;

type Rule<T> = (&'static str, fn(&mut T, &str));

const CLASS_RULES: &[Rule<ClassMeta>] = &[
    ("modelId", |c, v| c.set_model_id(Some(v.to_string()))),
    ("className", |c, v| c.set_class_name(v)),
    ("parentClassName", |c, v| c.set_parent_class_name(Some(v.to_string()))),
    ("classSource", |c, v| c.set_class_source(Some(v.to_string()))),
    ("superClassName", |c, v| c.set_super_class_name(Some(v.to_string()))),
];

const PROPERTY_RULES: &[Rule<PropertyMeta>] = &[
    ("name", |p, v| p.name = v.to_string()),
    ("className", |p, v| p.class_name = v.to_string()),
    ("required", |p, v| p.required = is_true(v)),
    ("literalOnly", |p, v| p.literal_only = is_true(v)),
    ("transient", |p, v| p.transient = is_true(v)),
    ("inherited", |p, v| p.inherited = is_true(v)),
    ("defaultValue", |p, v| p.default_value = Some(v.to_string())),
    ("desc", |p, v| p.description = Some(v.to_string())),
];

/// An entity kind readable from a `<model>` child element.
trait XmlEntity: JsfEntity + Default + 'static {
    const RULES: &'static [Rule<Self>];

    /// Handle a child element no rule matched. Returns whether it was used.
    fn read_child(&mut self, _child: Node<'_, '_>) -> Result<bool, MetadataXmlError> {
        Ok(false)
    }

    fn add_to(self, model: &mut Model) -> Result<(), DomainError>;
}

impl XmlEntity for ComponentMeta {
    const RULES: &'static [Rule<Self>] = &[
        ("name", |c, v| c.name = Some(v.to_string())),
        ("type", |c, v| c.component_type = Some(v.to_string())),
        ("family", |c, v| c.family = Some(v.to_string())),
        ("rendererType", |c, v| c.renderer_type = Some(v.to_string())),
        ("tagClass", |c, v| c.tag_class = Some(v.to_string())),
        ("tagPackage", |c, v| c.tag_package = Some(v.to_string())),
        ("tagSuperclass", |c, v| c.tag_super_class = Some(v.to_string())),
        ("desc", |c, v| c.description = Some(v.to_string())),
    ];

    fn read_child(&mut self, child: Node<'_, '_>) -> Result<bool, MetadataXmlError> {
        if !child.has_tag_name("property") {
            return Ok(false);
        }
        self.add_property(read_property(child)?);
        Ok(true)
    }

    fn add_to(self, model: &mut Model) -> Result<(), DomainError> {
        model.add_component(self)
    }
}

impl XmlEntity for ConverterMeta {
    const RULES: &'static [Rule<Self>] = &[
        ("converterId", |c, v| c.converter_id = Some(v.to_string())),
        ("desc", |c, v| c.description = Some(v.to_string())),
    ];

    fn add_to(self, model: &mut Model) -> Result<(), DomainError> {
        model.add_converter(self)
    }
}

impl XmlEntity for ValidatorMeta {
    const RULES: &'static [Rule<Self>] = &[
        ("validatorId", |c, v| c.validator_id = Some(v.to_string())),
        ("desc", |c, v| c.description = Some(v.to_string())),
    ];

    fn add_to(self, model: &mut Model) -> Result<(), DomainError> {
        model.add_validator(self)
    }
}

impl XmlEntity for RenderKitMeta {
    const RULES: &'static [Rule<Self>] =
        &[("renderKitId", |c, v| c.render_kit_id = Some(v.to_string()))];

    fn add_to(self, model: &mut Model) -> Result<(), DomainError> {
        model.add_render_kit(self)
    }
}

/// Parse a metadata document.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn read_model(text: &str) -> Result<Model, MetadataXmlError> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !root.has_tag_name("model") {
        return Err(MetadataXmlError::UnexpectedRoot(
            root.tag_name().name().to_string(),
        ));
    }

    let mut model = Model::new();
    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "component" => read_entity::<ComponentMeta>(child, &mut model)?,
            "converter" => read_entity::<ConverterMeta>(child, &mut model)?,
            "validator" => read_entity::<ValidatorMeta>(child, &mut model)?,
            "renderKit" => read_entity::<RenderKitMeta>(child, &mut model)?,
            other => debug!(element = other, "Ignoring unknown model element"),
        }
    }
    Ok(model)
}

fn read_entity<T: XmlEntity>(
    node: Node<'_, '_>,
    model: &mut Model,
) -> Result<(), MetadataXmlError> {
    let mut entity = T::default();
    let mut has_class_name = false;

    for child in node.children().filter(Node::is_element) {
        let tag = child.tag_name().name();

        if tag == "interfaces" {
            for iface in child.children().filter(|n| n.has_tag_name("interface")) {
                if let Some(name) = iface.attribute("name") {
                    entity.class_meta_mut().add_interface_class_name(name.trim());
                }
            }
        } else if let Some((_, set)) = CLASS_RULES.iter().find(|(name, _)| *name == tag) {
            set(entity.class_meta_mut(), text_of(child));
            has_class_name |= tag == "className";
        } else if let Some((_, set)) = T::RULES.iter().find(|(name, _)| *name == tag) {
            set(&mut entity, text_of(child));
        } else if !entity.read_child(child)? {
            debug!(kind = T::KIND, element = tag, "Ignoring unknown element");
        }
    }

    if !has_class_name || entity.class_name().is_empty() {
        return Err(DomainError::MissingRequiredField {
            entity: T::KIND,
            field: "className",
        }
        .into());
    }

    entity.add_to(model)?;
    Ok(())
}

fn read_property(node: Node<'_, '_>) -> Result<PropertyMeta, MetadataXmlError> {
    let mut property = PropertyMeta::new("");

    for child in node.children().filter(Node::is_element) {
        let tag = child.tag_name().name();
        if let Some((_, set)) = PROPERTY_RULES.iter().find(|(name, _)| *name == tag) {
            set(&mut property, text_of(child));
        }
    }

    if property.name.is_empty() {
        return Err(DomainError::MissingRequiredField {
            entity: "property",
            field: "name",
        }
        .into());
    }
    Ok(property)
}

fn text_of<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or_default()
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

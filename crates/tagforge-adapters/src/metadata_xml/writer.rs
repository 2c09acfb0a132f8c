//! Metadata model to XML.

use std::borrow::Cow;

use tagforge_core::domain::{ClassMeta, ComponentMeta, JsfEntity, Model, PropertyMeta};

const INDENT: &str = "  ";

/// Minimal pretty-printing XML writer.
pub struct XmlWriter {
    out: String,
    open: Vec<&'static str>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            out: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            open: Vec::new(),
        }
    }

    pub fn start(&mut self, name: &'static str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        self.out.push_str(">\n");
        self.open.push(name);
    }

    /// Close the innermost open element. No-op when nothing is open.
    pub fn end(&mut self) {
        if let Some(name) = self.open.pop() {
            self.indent();
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push_str(">\n");
        }
    }

    pub fn text_element(&mut self, name: &str, value: &str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        self.out.push_str(&escape(value, false));
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }

    /// Write `value` when present.
    pub fn optional(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.text_element(name, value);
        }
    }

    /// Write `<name>true</name>` when `value` is set.
    pub fn flag(&mut self, name: &str, value: bool) {
        if value {
            self.text_element(name, "true");
        }
    }

    pub fn empty_with_attribute(&mut self, name: &str, attribute: &str, value: &str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        self.out.push(' ');
        self.out.push_str(attribute);
        self.out.push_str("=\"");
        self.out.push_str(&escape(value, true));
        self.out.push_str("\"/>\n");
    }

    /// Close any open elements and return the document.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end();
        }
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.out.push_str(INDENT);
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str, attribute: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '<' | '>' | '&') || (attribute && c == '"');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' if attribute => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Serialize `model`: components, converters, validators, then render kits.
pub fn write_model(model: &Model) -> String {
    let mut w = XmlWriter::new();
    w.start("model");

    for component in model.components() {
        w.start("component");
        write_class(&mut w, component.class_meta());
        write_component_fields(&mut w, component);
        for property in component.properties() {
            write_property(&mut w, property);
        }
        w.end();
    }

    for converter in model.converters() {
        w.start("converter");
        write_class(&mut w, converter.class_meta());
        w.optional("converterId", converter.converter_id.as_deref());
        w.optional("desc", converter.description.as_deref());
        w.end();
    }

    for validator in model.validators() {
        w.start("validator");
        write_class(&mut w, validator.class_meta());
        w.optional("validatorId", validator.validator_id.as_deref());
        w.optional("desc", validator.description.as_deref());
        w.end();
    }

    for render_kit in model.render_kits() {
        w.start("renderKit");
        write_class(&mut w, render_kit.class_meta());
        w.optional("renderKitId", render_kit.render_kit_id.as_deref());
        w.end();
    }

    w.finish()
}

fn write_class(w: &mut XmlWriter, class: &ClassMeta) {
    w.optional("modelId", class.model_id());
    w.text_element("className", class.class_name());
    w.optional("parentClassName", class.parent_class_name());
    w.optional("classSource", class.class_source());
    w.optional("superClassName", class.declared_super_class_name());

    if !class.interface_class_names().is_empty() {
        w.start("interfaces");
        for name in class.interface_class_names() {
            w.empty_with_attribute("interface", "name", name);
        }
        w.end();
    }
}

fn write_component_fields(w: &mut XmlWriter, component: &ComponentMeta) {
    w.optional("name", component.name.as_deref());
    w.optional("type", component.component_type.as_deref());
    w.optional("family", component.family.as_deref());
    w.optional("rendererType", component.renderer_type.as_deref());
    w.optional("tagClass", component.tag_class.as_deref());
    w.optional("tagPackage", component.tag_package.as_deref());
    w.optional("tagSuperclass", component.tag_super_class.as_deref());
    w.optional("desc", component.description.as_deref());
}

fn write_property(w: &mut XmlWriter, property: &PropertyMeta) {
    w.start("property");
    w.text_element("name", &property.name);
    w.text_element("className", &property.class_name);
    w.flag("required", property.required);
    w.flag("literalOnly", property.literal_only);
    w.flag("transient", property.transient);
    w.flag("inherited", property.inherited);
    w.optional("defaultValue", property.default_value.as_deref());
    w.optional("desc", property.description.as_deref());
    w.end();
}

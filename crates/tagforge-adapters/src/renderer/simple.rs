//! Handlebars-backed template renderer.

use handlebars::Handlebars;
use serde_json::{Map, Value};
use tagforge_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::TagforgeResult,
};
use tracing::instrument;

/// Renderer for Handlebars templates in strict mode.
///
/// Dotted variable names become nested objects, so `component.type` is
/// reachable as `{{ component.type }}`. Each entry of a list also sees the
/// variables of the contexts around it, so an `{{#each properties}}` body
/// can use both `property.*` and `component.*`. Output is not HTML-escaped.
pub struct SimpleRenderer {
    registry: Handlebars<'static>,
}

impl SimpleRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, context: &RenderContext) -> TagforgeResult<String> {
        let data = to_json(&Map::new(), context);
        let rendered = self
            .registry
            .render_template(template, &data)
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: e.to_string(),
            })?;
        Ok(rendered)
    }
}

/// Build the template data for `context` on top of the variables bound by
/// the enclosing contexts.
fn to_json(outer: &Map<String, Value>, context: &RenderContext) -> Value {
    let mut object = outer.clone();
    for (name, value) in context.variables() {
        insert_dotted(&mut object, name, scalar(value));
    }
    let scope = object.clone();
    for (name, items) in context.lists() {
        let items = items.iter().map(|item| to_json(&scope, item)).collect();
        insert_dotted(&mut object, name, Value::Array(items));
    }
    Value::Object(object)
}

/// Flags are bound as `"true"` / `"false"`; Handlebars treats any non-empty
/// string as truthy, so they go in as booleans.
fn scalar(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

fn insert_dotted(object: &mut Map<String, Value>, name: &str, value: Value) {
    match name.split_once('.') {
        None => {
            object.insert(name.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = object
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(child) = slot {
                insert_dotted(child, rest, value);
            }
        }
    }
}

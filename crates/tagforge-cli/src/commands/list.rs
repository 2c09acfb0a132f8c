//! Implementation of the `tagforge list` command.

use serde::Serialize;

use tagforge_core::domain::{ComponentMeta, JsfEntity, Model};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct ComponentRow<'a> {
    class_name: &'a str,
    model_id: Option<&'a str>,
    component_type: Option<&'a str>,
    tag_class: Option<&'a str>,
    properties: usize,
}

impl<'a> From<&'a ComponentMeta> for ComponentRow<'a> {
    fn from(component: &'a ComponentMeta) -> Self {
        Self {
            class_name: component.class_name(),
            model_id: component.class_meta().model_id(),
            component_type: component.component_type.as_deref(),
            tag_class: component.tag_class.as_deref(),
            properties: component.property_count(),
        }
    }
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    super::require_metadata(&args.input)?;

    let service = super::local_metadata_service();
    let model = if args.flatten {
        service
            .load_flattened(&args.input, config.flatten.unresolved)?
            .0
    } else {
        service.load(&args.input)?
    };

    let rows = rows(&model, args.model_id.as_deref());
    output.data(&render(&rows, args.format)?)?;
    Ok(())
}

fn rows<'m>(model: &'m Model, model_id: Option<&str>) -> Vec<ComponentRow<'m>> {
    model
        .components()
        .iter()
        .filter(|c| model_id.is_none() || c.class_meta().model_id() == model_id)
        .map(ComponentRow::from)
        .collect()
}

fn render(rows: &[ComponentRow<'_>], format: ListFormat) -> CliResult<String> {
    let text = match format {
        ListFormat::Table => {
            let width = rows
                .iter()
                .map(|r| r.class_name.len())
                .max()
                .unwrap_or(0)
                .max("CLASS".len());
            let mut out = format!("{:<width$}  {:>5}  TAG CLASS\n", "CLASS", "PROPS");
            for row in rows {
                out.push_str(&format!(
                    "{:<width$}  {:>5}  {}\n",
                    row.class_name,
                    row.properties,
                    row.tag_class.unwrap_or("-"),
                ));
            }
            out
        }
        ListFormat::List => rows
            .iter()
            .map(|r| format!("{}\n", r.class_name))
            .collect(),
        ListFormat::Json => {
            serde_json::to_string_pretty(rows).map_err(|e| CliError::InvalidInput {
                message: format!("Cannot serialise listing: {e}"),
                source: Some(Box::new(e)),
            })?
        }
        ListFormat::Csv => {
            let mut out = String::from("class_name,model_id,component_type,tag_class,properties\n");
            for row in rows {
                out.push_str(&format!(
                    "{},{},{},{},{}\n",
                    row.class_name,
                    row.model_id.unwrap_or_default(),
                    row.component_type.unwrap_or_default(),
                    row.tag_class.unwrap_or_default(),
                    row.properties,
                ));
            }
            out
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagforge_core::domain::{ClassMeta, PropertyMeta};

    fn model() -> Model {
        let mut model = Model::new();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("org.demo.HtmlButton").with_model_id("demo"))
                    .with_tag_class("org.demo.taglib.ButtonTag")
                    .with_property(PropertyMeta::new("label")),
            )
            .unwrap();
        model
            .add_component(ComponentMeta::new(
                ClassMeta::new("org.other.Panel").with_model_id("other"),
            ))
            .unwrap();
        model
    }

    #[test]
    fn model_id_filters_rows() {
        let model = model();
        assert_eq!(rows(&model, None).len(), 2);
        let demo = rows(&model, Some("demo"));
        assert_eq!(demo.len(), 1);
        assert_eq!(demo[0].class_name, "org.demo.HtmlButton");
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let model = model();
        let text = render(&rows(&model, None), ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["tag_class"], "org.demo.taglib.ButtonTag");
        assert_eq!(value[1]["tag_class"], serde_json::Value::Null);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let model = model();
        let text = render(&rows(&model, None), ListFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "org.demo.HtmlButton,demo,,org.demo.taglib.ButtonTag,1");
    }

    #[test]
    fn table_pads_class_column() {
        let model = model();
        let text = render(&rows(&model, None), ListFormat::Table).unwrap();
        assert!(text.starts_with("CLASS"));
        assert!(text.contains("org.other.Panel      "));
        assert!(text.contains(" -\n"));
    }
}

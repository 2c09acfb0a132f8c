//! End-to-end tests over a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use tagforge_adapters::{
    DirectoryTemplateSource, LocalFilesystem, SimpleRenderer, TomlCacheStore, XmlModelRepository,
    metadata_xml::{read_model, write_model},
};
use tagforge_core::application::ApplicationError;
use tagforge_core::prelude::*;

const METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<model>
  <component>
    <modelId>demo</modelId>
    <className>org.demo.component.UIBase</className>
    <property>
      <name>rendered</name>
      <className>boolean</className>
    </property>
  </component>
  <component>
    <modelId>demo</modelId>
    <className>org.demo.component.HtmlButton</className>
    <parentClassName>org.demo.component.UIBase</parentClassName>
    <type>org.demo.HtmlButton</type>
    <rendererType>org.demo.Button</rendererType>
    <tagClass>org.demo.taglib.HtmlButtonTag</tagClass>
    <property>
      <name>label</name>
      <required>true</required>
    </property>
  </component>
  <component>
    <modelId>demo</modelId>
    <className>org.demo.component.HtmlLink</className>
    <parentClassName>org.demo.component.UIBase</parentClassName>
    <type>org.demo.HtmlLink</type>
    <tagClass>org.demo.taglib.HtmlLinkTag</tagClass>
  </component>
</model>
"#;

struct Project {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("build/META-INF")).unwrap();
        fs::write(root.join("build/META-INF/myfaces-metadata.xml"), METADATA).unwrap();
        Self { _dir: dir, root }
    }

    fn metadata(&self) -> PathBuf {
        self.root.join("build/META-INF/myfaces-metadata.xml")
    }

    fn output(&self) -> PathBuf {
        self.root.join("generated")
    }

    fn cache_file(&self) -> PathBuf {
        self.root.join("build/tagforge-cache.toml")
    }

    fn service(&self, template_dir: Option<PathBuf>) -> TagGenerationService {
        TagGenerationService::new(
            MetadataService::new(Box::new(XmlModelRepository::new(LocalFilesystem::new()))),
            Box::new(DirectoryTemplateSource::new(LocalFilesystem::new(), template_dir)),
            Box::new(SimpleRenderer::new()),
            Box::new(LocalFilesystem::new()),
            Box::new(TomlCacheStore::new(LocalFilesystem::new(), self.cache_file())),
        )
    }

    fn options(&self, template: &str) -> GenerateOptions {
        GenerateOptions::new(GenerationFilter::for_models(["demo"]), template, self.output())
            .with_source_root(self.root.join("src/main/java"))
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_xml_round_trip_keeps_classes_and_interface_order() {
    let mut model = Model::new();
    for i in 0..5 {
        let mut class = ClassMeta::new(format!("org.demo.C{i}")).with_model_id("demo");
        if i == 3 {
            class = class
                .with_interface("org.demo.Second")
                .with_interface("org.demo.First");
        }
        model
            .add_component(
                ComponentMeta::new(class)
                    .with_tag_class(format!("org.demo.taglib.C{i}Tag"))
                    .with_property(PropertyMeta::new("value").with_description("a < b")),
            )
            .unwrap();
    }
    model
        .add_converter(ConverterMeta::new(ClassMeta::new("org.demo.DateConverter")))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta.xml");
    let repo = XmlModelRepository::new(LocalFilesystem::new());
    repo.save(&model, &path).unwrap();
    let loaded = repo.load(&path).unwrap();

    let names = |m: &Model| {
        m.components()
            .iter()
            .map(|c| c.class_name().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&loaded), names(&model));
    assert_eq!(
        loaded.components()[3].class_meta().interface_class_names(),
        ["org.demo.Second".to_string(), "org.demo.First".to_string()]
    );
    assert_eq!(loaded, model);
    assert_eq!(read_model(&write_model(&loaded)).unwrap(), model);
}

#[test]
fn test_generate_with_builtin_template() {
    let project = Project::new();

    let report = project
        .service(None)
        .execute(&project.metadata(), &project.options("tagClass12.tmpl"))
        .unwrap();

    assert_eq!(report.generated.len(), 2);
    let button = read(&project.output().join("org/demo/taglib/HtmlButtonTag.java"));
    assert!(button.contains("package org.demo.taglib;"));
    assert!(button.contains("public class HtmlButtonTag"));
    assert!(button.contains("return \"org.demo.Button\";"));
    // inherited from UIBase
    assert!(button.contains("public void setRendered(ValueExpression value)"));
    assert!(button.contains("public void setLabel(ValueExpression value)"));

    let link = read(&project.output().join("org/demo/taglib/HtmlLinkTag.java"));
    assert!(link.contains("return null;"));
    assert!(project.cache_file().exists());
}

#[test]
fn test_hand_written_tag_class_is_skipped() {
    let project = Project::new();
    let hand_written = project.root.join("src/main/java/org/demo/taglib/HtmlLinkTag.java");
    fs::create_dir_all(hand_written.parent().unwrap()).unwrap();
    fs::write(&hand_written, "// mine").unwrap();

    let report = project
        .service(None)
        .execute(&project.metadata(), &project.options("tagClass11.tmpl"))
        .unwrap();

    assert_eq!(report.skipped_existing, vec!["org.demo.taglib.HtmlLinkTag".to_string()]);
    assert!(!project.output().join("org/demo/taglib/HtmlLinkTag.java").exists());
    assert!(project.output().join("org/demo/taglib/HtmlButtonTag.java").exists());
}

#[test]
fn test_cache_skips_then_regenerates_when_stale() {
    let project = Project::new();
    let service = project.service(None);
    let options = project.options("tagClass11.tmpl");

    let first = service.execute(&project.metadata(), &options).unwrap();
    assert_eq!(first.generated.len(), 2);

    let second = service.execute(&project.metadata(), &options).unwrap();
    assert!(second.up_to_date);
    assert!(second.generated.is_empty());

    // Entries older than the metadata file force a rebuild.
    let stale: String = read(&project.cache_file())
        .lines()
        .map(|line| {
            let (key, _) = line.split_once(" = ").unwrap();
            format!("{key} = \"0\"\n")
        })
        .collect();
    fs::write(project.cache_file(), stale).unwrap();

    let third = service.execute(&project.metadata(), &options).unwrap();
    assert!(!third.up_to_date);
    assert_eq!(third.generated.len(), 2);
}

#[test]
fn test_render_failure_aborts_unless_forced() {
    let project = Project::new();
    let templates = project.root.join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("broken.tmpl"), "class {{ component.nope }}").unwrap();
    let service = project.service(Some(templates));

    let err = service
        .execute(&project.metadata(), &project.options("broken.tmpl"))
        .unwrap_err();
    assert!(matches!(
        err,
        TagforgeError::Application(ApplicationError::GenerationFailed { .. })
    ));

    let report = service
        .execute(
            &project.metadata(),
            &project.options("broken.tmpl").with_force(true),
        )
        .unwrap();
    assert_eq!(report.failed.len(), 2);
    assert!(report.generated.is_empty());
    assert!(!project.output().exists());
}

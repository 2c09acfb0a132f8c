//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn tagforge(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("tagforge");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("TAGFORGE_PROJECT__ID");
    cmd
}

#[test]
fn test_generate_without_model_id() {
    let dir = TempDir::new().unwrap();
    tagforge(&dir)
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No model id given"))
        .stderr(predicate::str::contains("--model-id"));
}

#[test]
fn test_missing_metadata_is_not_found() {
    let dir = TempDir::new().unwrap();
    tagforge(&dir)
        .args(["generate", "--model-id", "demo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Metadata file not found"));
}

#[test]
fn test_inheritance_cycle_is_user_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cycle.xml");
    fs::write(
        &path,
        "<model>\
           <component><className>a.A</className><parentClassName>a.B</parentClassName></component>\
           <component><className>a.B</className><parentClassName>a.A</parentClassName></component>\
         </model>",
    )
    .unwrap();

    tagforge(&dir)
        .arg("flatten")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a.A"));
}

#[test]
fn test_unresolved_parent_can_be_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orphan.xml");
    fs::write(
        &path,
        "<model><component><className>a.Orphan</className>\
         <parentClassName>missing.Base</parentClassName></component></model>",
    )
    .unwrap();

    tagforge(&dir).arg("flatten").arg(&path).assert().code(2);
    tagforge(&dir)
        .arg("flatten")
        .arg(&path)
        .arg("--skip-unresolved")
        .assert()
        .success();
}

#[test]
fn test_malformed_xml_is_user_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, "<model><component>").unwrap();

    tagforge(&dir)
        .args(["list"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_template_is_not_found() {
    let dir = TempDir::new().unwrap();
    let meta = dir.path().join("target/classes/META-INF");
    fs::create_dir_all(&meta).unwrap();
    fs::write(
        meta.join("myfaces-metadata.xml"),
        "<model><component><modelId>demo</modelId><className>a.A</className>\
         <tagClass>a.ATag</tagClass></component></model>",
    )
    .unwrap();

    tagforge(&dir)
        .args(["generate", "--model-id", "demo", "--template", "nope.tmpl"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.tmpl"));
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    tagforge(&dir)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    tagforge(&dir)
        .args(["config", "get", "nope.key"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

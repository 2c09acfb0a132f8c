//! Templates that ship with Tagforge.
//!
//! A template with the same name in the template directory takes precedence
//! over these, see [`DirectoryTemplateSource`](crate::DirectoryTemplateSource).

use tagforge_core::domain::{TAG_TEMPLATE_11, TAG_TEMPLATE_12};

const TAG_CLASS_11: &str = include_str!("../templates/tagClass11.tmpl");
const TAG_CLASS_12: &str = include_str!("../templates/tagClass12.tmpl");

const BUILTIN: &[(&str, &str)] = &[(TAG_TEMPLATE_11, TAG_CLASS_11), (TAG_TEMPLATE_12, TAG_CLASS_12)];

/// Look up a built-in template by file name.
pub fn get(name: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, text)| *text)
}

/// Names of all built-in templates.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

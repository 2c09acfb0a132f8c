//! Template lookup: the template directory first, then the built-ins.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use tagforge_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ResolvedTemplate, TemplateOrigin, TemplateSource},
    },
    error::TagforgeResult,
};

use crate::builtin_templates;

/// Resolves template names against an optional directory, falling back to
/// the templates compiled into the binary.
pub struct DirectoryTemplateSource<F: Filesystem> {
    filesystem: F,
    directory: Option<PathBuf>,
}

impl<F: Filesystem> DirectoryTemplateSource<F> {
    pub fn new(filesystem: F, directory: Option<PathBuf>) -> Self {
        Self {
            filesystem,
            directory,
        }
    }

    /// Only the built-in templates.
    pub fn builtin_only(filesystem: F) -> Self {
        Self::new(filesystem, None)
    }
}

impl<F: Filesystem> TemplateSource for DirectoryTemplateSource<F> {
    #[instrument(skip(self))]
    fn resolve(&self, name: &str) -> TagforgeResult<ResolvedTemplate> {
        if let Some(dir) = &self.directory {
            let path = dir.join(name);
            if self.filesystem.exists(&path) {
                let text = self.filesystem.read_to_string(&path)?;
                info!(path = %path.display(), "Using template from template directory");
                return Ok(ResolvedTemplate {
                    name: name.to_string(),
                    text,
                    origin: TemplateOrigin::Directory(path),
                });
            }
            debug!(path = %path.display(), "Template not in template directory");
        }

        match builtin_templates::get(name) {
            Some(text) => {
                info!(template = name, "Using built-in template");
                Ok(ResolvedTemplate {
                    name: name.to_string(),
                    text: text.to_string(),
                    origin: TemplateOrigin::Builtin,
                })
            }
            None => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                searched: self.directory.clone().unwrap_or_default(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::MemoryFilesystem;

    #[test]
    fn directory_template_wins() {
        let fs = MemoryFilesystem::new().with_file("/tpl/tagClass11.tmpl", "custom");
        let source = DirectoryTemplateSource::new(fs, Some("/tpl".into()));

        let template = source.resolve("tagClass11.tmpl").unwrap();
        assert_eq!(template.text, "custom");
        assert_eq!(
            template.origin,
            TemplateOrigin::Directory(Path::new("/tpl/tagClass11.tmpl").to_path_buf())
        );
    }

    #[test]
    fn falls_back_to_builtin() {
        let source = DirectoryTemplateSource::new(MemoryFilesystem::new(), Some("/tpl".into()));

        let template = source.resolve("tagClass12.tmpl").unwrap();
        assert_eq!(template.origin, TemplateOrigin::Builtin);
    }

    #[test]
    fn unknown_template_is_not_found() {
        let source = DirectoryTemplateSource::builtin_only(MemoryFilesystem::new());

        let err = source.resolve("custom.tmpl").unwrap_err();
        assert!(err.to_string().contains("custom.tmpl"));
    }
}

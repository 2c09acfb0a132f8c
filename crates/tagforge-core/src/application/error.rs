//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not metadata
//! consistency. Metadata errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The metadata file is not well-formed.
    #[error("Failed to parse metadata {path}: {reason}")]
    MetadataParse { path: PathBuf, reason: String },

    /// Neither the template directory nor the built-ins have the template.
    #[error("Template '{name}' not found (searched {searched} and built-in templates)")]
    TemplateNotFound { name: String, searched: PathBuf },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Generating one tag class failed.
    #[error("Failed to generate tag class {tag_class}: {reason}")]
    GenerationFailed { tag_class: String, reason: String },

    /// The generation cache could not be read or written.
    #[error("Cache error at {path}: {reason}")]
    CacheError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Filesystem store is locked")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and you have permissions".into(),
            ],
            Self::MetadataParse { path, .. } => vec![
                format!("Inspect {}", path.display()),
                "Regenerate the metadata file with the build-metadata step".into(),
            ],
            Self::TemplateNotFound { name, searched } => vec![
                format!("Place '{}' in {}", name, searched.display()),
                "Or pass --template with an existing template name".into(),
                "Or pass --jsf-version to pick a built-in template".into(),
            ],
            Self::GenerationFailed { .. } | Self::RenderingFailed { .. } => vec![
                "Check the template for unknown variables or unclosed blocks".into(),
                "Use --force to log the failure and continue with other components".into(),
            ],
            Self::CacheError { path, .. } => vec![
                format!("Delete {} to reset the cache", path.display()),
                "Or run with --no-cache".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::MetadataParse { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::GenerationFailed { .. }
            | Self::CacheError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

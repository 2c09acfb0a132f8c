//! Unified error handling for Tagforge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Tagforge Core operations.
#[derive(Debug, Error, Clone)]
pub enum TagforgeError {
    /// Malformed or inconsistent metadata.
    #[error("Metadata error: {0}")]
    Domain(#[from] DomainError),

    /// I/O, parsing, template and rendering failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TagforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your tagforge.toml and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Consistency => ErrorCategory::Consistency,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Consistency,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type TagforgeResult<T> = Result<T, TagforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_category_maps_through() {
        let err: TagforgeError = DomainError::UnresolvedAncestor {
            class_name: "A".into(),
            reference: "B".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Consistency);
        assert!(err.suggestions().iter().any(|s| s.contains("skip")));
    }

    #[test]
    fn template_not_found_is_not_found() {
        let err: TagforgeError = ApplicationError::TemplateNotFound {
            name: "x.tmpl".into(),
            searched: "/tpl".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}

// ============================================================================
// domain/error.rs - METADATA ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Duplicate {kind} class name: {class_name}")]
    DuplicateClassName {
        kind: &'static str,
        class_name: String,
    },

    #[error("Required field missing on {entity}: {field}")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Invalid class name '{class_name}': {reason}")]
    InvalidClassName { class_name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown JSF version '{0}' (expected 1.1, 1.2 or 2.0)")]
    InvalidJsfVersion(String),

    // ========================================================================
    // Consistency Errors
    // ========================================================================
    #[error("Component '{class_name}' references unknown ancestor '{reference}'")]
    UnresolvedAncestor {
        class_name: String,
        reference: String,
    },

    #[error("Inheritance cycle detected for '{class_name}': {chain}")]
    InheritanceCycle { class_name: String, chain: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateClassName { kind, class_name } => vec![
                format!("The {} '{}' is declared more than once", kind, class_name),
                "Check that metadata from different modules is not merged twice".into(),
            ],
            Self::MissingRequiredField { entity, field } => vec![
                format!("Every <{}> element needs a <{}> child", entity, field),
                "Regenerate the metadata file".into(),
            ],
            Self::UnresolvedAncestor { reference, .. } => vec![
                format!("'{}' is not present in the loaded metadata", reference),
                "Make sure the metadata of the module defining it is merged in".into(),
                "Or set flatten.unresolved = \"skip\" to ignore missing ancestors".into(),
            ],
            Self::InheritanceCycle { chain, .. } => vec![
                format!("Cycle: {}", chain),
                "A component cannot be its own ancestor".into(),
            ],
            Self::InvalidJsfVersion(_) => vec![
                "Supported versions: 1.1, 1.2, 2.0 (also 11, 12, 20)".into(),
            ],
            _ => vec!["Check the metadata file for the entry named above".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnresolvedAncestor { .. } | Self::InheritanceCycle { .. } => {
                ErrorCategory::Consistency
            }
            Self::DuplicateClassName { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidClassName { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::InvalidJsfVersion(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Consistency,
}

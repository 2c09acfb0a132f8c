use super::super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Source file path of a Java class relative to a source root.
    ///
    /// `org.example.FooTag` -> `org/example/FooTag.java`
    pub fn for_java_class(class_name: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidClassName {
            class_name: class_name.to_string(),
            reason: reason.to_string(),
        };

        if class_name.is_empty() {
            return Err(invalid("name is empty"));
        }

        let segments: Vec<&str> = class_name.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("empty package segment"));
        }
        if segments
            .iter()
            .any(|s| s.contains(['/', '\\']) || *s == "..")
        {
            return Err(invalid("contains path characters"));
        }

        let (last, packages) = segments
            .split_last()
            .ok_or_else(|| invalid("name is empty"))?;
        let mut path: PathBuf = packages.iter().collect();
        path.push(format!("{last}.java"));
        Self::try_new(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

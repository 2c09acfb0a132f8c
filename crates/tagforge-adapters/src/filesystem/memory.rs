//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tagforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TagforgeResult,
};

/// In-memory filesystem for testing.
///
/// Every write stamps the file with a logical clock that advances by one
/// second per write; [`MemoryFilesystem::set_modified`] overrides the stamp.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, MemoryFile>,
    directories: HashSet<PathBuf>,
    clock: u64,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    modified: u64,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        let _ = self.write_file(path, content);
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|f| f.content.clone())
    }

    /// Override a file's modification time.
    pub fn set_modified(&self, path: &Path, millis: u64) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(file) = inner.files.get_mut(path) {
                file.modified = millis;
            }
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TagforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TagforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.clock += 1_000;
        let modified = inner.clock;
        inner.files.insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.to_string(),
                modified,
            },
        );
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> TagforgeResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn modified_millis(&self, path: &Path) -> Option<u64> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|f| f.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/A.java"), "x").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/A.java"), "x").unwrap();
        assert!(fs.exists(Path::new("/out")));
        assert_eq!(fs.read_file(Path::new("/out/A.java")).as_deref(), Some("x"));
    }

    #[test]
    fn writes_advance_the_clock() {
        let fs = MemoryFilesystem::new()
            .with_file("/a.txt", "1")
            .with_file("/b.txt", "2");

        let a = fs.modified_millis(Path::new("/a.txt")).unwrap();
        let b = fs.modified_millis(Path::new("/b.txt")).unwrap();
        assert!(b > a);

        fs.set_modified(Path::new("/a.txt"), 5);
        assert_eq!(fs.modified_millis(Path::new("/a.txt")), Some(5));
        assert_eq!(fs.modified_millis(Path::new("/missing")), None);
    }
}

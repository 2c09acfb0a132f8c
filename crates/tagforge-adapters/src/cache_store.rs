//! Generation cache persisted as a flat TOML table.
//!
//! ```toml
//! "/project/target/generated/org/demo/ButtonTag.java" = "1718000000000"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, instrument, warn};

use tagforge_core::{
    application::{ApplicationError, ports::{CacheStore, Filesystem}},
    domain::GenerationCache,
    error::TagforgeResult,
};

pub struct TomlCacheStore<F: Filesystem> {
    filesystem: F,
    path: PathBuf,
}

impl<F: Filesystem> TomlCacheStore<F> {
    pub fn new(filesystem: F, path: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            path: path.into(),
        }
    }

    fn cache_error(&self, reason: impl ToString) -> ApplicationError {
        ApplicationError::CacheError {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl<F: Filesystem> CacheStore for TomlCacheStore<F> {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> TagforgeResult<GenerationCache> {
        if !self.filesystem.exists(&self.path) {
            debug!("No cache file, starting empty");
            return Ok(GenerationCache::new());
        }

        let text = self.filesystem.read_to_string(&self.path)?;
        let entries: BTreeMap<String, String> =
            toml::from_str(&text).map_err(|e| self.cache_error(e.message()))?;

        let cache = GenerationCache::from_entries(entries);
        debug!(entries = cache.len(), "Cache loaded");
        Ok(cache)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), entries = cache.len()))]
    fn store(&self, cache: &GenerationCache) -> TagforgeResult<()> {
        let text = toml::to_string(cache.entries()).map_err(|e| self.cache_error(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        if let Err(e) = self.filesystem.write_file(&self.path, &text) {
            warn!(error = %e, "Failed to write cache");
            return Err(e);
        }
        Ok(())
    }
}

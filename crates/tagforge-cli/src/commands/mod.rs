//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print the result.
//! Business rules stay in `tagforge-core`.

pub mod completions;
pub mod config;
pub mod flatten;
pub mod generate;
pub mod init;
pub mod list;

use std::path::Path;

use tagforge_adapters::{LocalFilesystem, XmlModelRepository};
use tagforge_core::application::MetadataService;

use crate::error::{CliError, CliResult};

/// Metadata service over the local filesystem.
fn local_metadata_service() -> MetadataService {
    MetadataService::new(Box::new(XmlModelRepository::new(LocalFilesystem::new())))
}

/// A missing metadata file is reported as not found rather than as an I/O failure.
fn require_metadata(path: &Path) -> CliResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MetadataNotFound {
            path: path.to_path_buf(),
        })
    }
}

use std::io;
use std::path::PathBuf;

use entity_forge_core::SchemaError;
use entity_forge_dsl::ReadError;

/// Errors raised while turning a schema into class files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodegenError {
    /// The entity cannot be expressed as a class (e.g. an empty name).
    #[error("cannot generate entity '{entity}': {source}")]
    Schema { entity: String, source: SchemaError },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// A generated file could not be written.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The schema file could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl CodegenError {
    /// The filesystem path involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Read(ReadError::Io {
                path: Some(path), ..
            }) => Some(path),
            _ => None,
        }
    }
}

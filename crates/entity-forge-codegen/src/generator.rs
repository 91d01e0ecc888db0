//! Writes rendered entities to an output directory.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use entity_forge_core::types::Entity;

use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use crate::render::render_entity;

/// Generates one class file per entity into a fixed output directory.
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
    options: GeneratorOptions,
}

impl Generator {
    /// A generator with default options.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_options(output_dir, GeneratorOptions::default())
    }

    pub fn with_options(output_dir: impl Into<PathBuf>, options: GeneratorOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Path the file for `entity` is written to.
    pub fn output_path(&self, entity: &Entity) -> PathBuf {
        self.output_dir
            .join(self.options.file_name(entity.name.as_str()))
    }

    /// Generate every entity in order, stopping at the first failure.
    ///
    /// Files written before the failure stay on disk. Returns the written
    /// paths in entity order.
    pub fn generate(&self, entities: &[Entity]) -> Result<Vec<PathBuf>, CodegenError> {
        self.create_output_dir()?;
        entities
            .iter()
            .map(|entity| self.write_entity(entity))
            .collect()
    }

    /// Generate every entity in order, continuing past failures.
    ///
    /// A failure to create the output directory is recorded against every
    /// entity, since none of them can be written.
    pub fn generate_each(&self, entities: &[Entity]) -> GenerationReport {
        let dir_result = fs::create_dir_all(&self.output_dir);
        let outcomes = entities
            .iter()
            .map(|entity| {
                let result = match &dir_result {
                    Ok(()) => self.write_entity(entity),
                    Err(e) => Err(CodegenError::CreateDir {
                        path: self.output_dir.clone(),
                        source: io::Error::new(e.kind(), e.to_string()),
                    }),
                };
                if let Err(e) = &result {
                    tracing::warn!(entity = %entity.name, error = %e, "generation failed");
                }
                EntityOutcome {
                    entity: entity.name.to_string(),
                    result,
                }
            })
            .collect();
        GenerationReport { outcomes }
    }

    /// Parse a schema file and generate its entities.
    ///
    /// Only an unreadable file is an error before generation starts; the
    /// parse itself is lenient.
    pub fn generate_from_file(&self, schema: impl AsRef<Path>) -> Result<Vec<PathBuf>, CodegenError> {
        let entities = entity_forge_dsl::parse_file(schema)?;
        self.generate(&entities)
    }

    /// Render and write one entity, replacing any existing file.
    ///
    /// The source is rendered before the file is opened, so a rendering
    /// failure never truncates an existing file.
    pub fn write_entity(&self, entity: &Entity) -> Result<PathBuf, CodegenError> {
        let code = render_entity(entity, &self.options)?;
        let path = self.output_path(entity);
        let write_err = |source| CodegenError::Write {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(write_err)?;
        file.write_all(code.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        tracing::info!(entity = %entity.name, path = %path.display(), "generated");
        Ok(path)
    }

    /// Create the output directory and any missing parents.
    pub fn create_output_dir(&self) -> Result<(), CodegenError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| CodegenError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })
    }
}

/// Result of generating a single entity.
#[derive(Debug)]
pub struct EntityOutcome {
    pub entity: String,
    pub result: Result<PathBuf, CodegenError>,
}

/// Per-entity results of [`Generator::generate_each`], in entity order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<EntityOutcome>,
}

impl GenerationReport {
    /// Paths written successfully.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    /// Entities that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &CodegenError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.entity.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

pub mod completions;
pub mod generate;
pub mod init;
pub mod parse;

use std::path::{Path, PathBuf};

use entity_forge_core::types::{validate_schema, Entity};
use entity_forge_dsl::DslError;

use crate::diagnostic::render_diagnostics;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// File extension of schema files.
pub const SCHEMA_EXTENSION: &str = "dsl";

/// One schema file, read and parsed.
pub struct SchemaFile {
    pub path: PathBuf,
    pub text: String,
    pub entities: Vec<Entity>,
    pub findings: Vec<DslError>,
}

impl SchemaFile {
    /// Read and leniently parse `path`, collecting lint findings alongside.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (entities, findings) = entity_forge_dsl::parse_with_findings(&text);
        tracing::debug!(
            path = %path.display(),
            entities = entities.len(),
            findings = findings.len(),
            "parsed schema file"
        );
        Ok(Self {
            path: path.to_path_buf(),
            text,
            entities,
            findings,
        })
    }

    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Print this file's findings in the current output mode.
    ///
    /// JSON mode prints nothing here; callers fold findings into their
    /// summary instead.
    pub fn report_findings(&self, output: &OutputContext, strict: bool) {
        if self.findings.is_empty() || (output.quiet && !strict) {
            return;
        }
        let filename = self.display_name();
        match output.mode {
            OutputMode::Human => {
                for report in render_diagnostics(&self.findings, &self.text, &filename, strict) {
                    eprintln!("{report:?}");
                }
            }
            OutputMode::Plain => {
                let level = if strict { "error" } else { "warning" };
                for finding in &self.findings {
                    eprintln!("{filename}\t{level}\t{finding}");
                }
            }
            OutputMode::Json => {}
        }
    }

    pub fn findings_json(&self) -> Vec<serde_json::Value> {
        self.findings
            .iter()
            .map(|f| {
                serde_json::json!({
                    "message": f.to_string(),
                    "start": f.span().start,
                    "end": f.span().end,
                })
            })
            .collect()
    }
}

/// Load every schema file under `paths`, in sorted order.
pub fn load_schema_files(paths: &[PathBuf]) -> Result<Vec<SchemaFile>, CliError> {
    discover_schema_files(paths)?
        .iter()
        .map(|path| SchemaFile::load(path))
        .collect()
}

/// Fail with the collected findings when strict mode is on.
///
/// Files that are clean on their own are then checked together, which
/// catches an entity defined in two files or named like a path.
pub fn enforce_strict(files: &[SchemaFile]) -> Result<(), CliError> {
    let mut offending = files.iter().filter(|f| !f.findings.is_empty());
    if let Some(first) = offending.next() {
        if offending.next().is_none() {
            return Err(CliError::Parse {
                errors: first.findings.clone(),
                source_text: first.text.clone(),
                file: first.path.clone(),
            });
        }
        let count = files.iter().map(|f| f.findings.len()).sum();
        return Err(CliError::StrictFindings { count });
    }

    validate_schema(files.iter().flat_map(|f| &f.entities))?;
    Ok(())
}

/// Discover schema files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for files matching `**/*.dsl`).
pub fn discover_schema_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = path.join("**").join(format!("*.{SCHEMA_EXTENSION}"));
            let entries = glob::glob(&pattern.to_string_lossy()).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
        } else {
            return Err(CliError::NoSchemaFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("schemas/"));
        return Err(CliError::NoSchemaFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}

use std::path::PathBuf;

use entity_forge_codegen::CodegenError;
use entity_forge_core::SchemaError;
use entity_forge_dsl::{DslError, ReadError};

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments / configuration
/// - 3: parse error (strict mode findings)
/// - 4: generation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
    GenerationError = 4,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Strict-mode findings in a schema file.
    #[error("parse errors in {file}")]
    Parse {
        errors: Vec<DslError>,
        source_text: String,
        file: PathBuf,
    },

    /// Strict-mode findings across several files, already reported.
    #[error("{count} schema findings in strict mode")]
    StrictFindings { count: usize },

    /// The schema as a whole cannot be generated (strict mode).
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    /// Class generation failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Several entities failed under `--keep-going`.
    #[error("{failed} of {total} entities failed to generate")]
    PartialGeneration { failed: usize, total: usize },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// User cancelled operation.
    #[error("operation cancelled")]
    Cancelled,

    /// Schema file or directory not found.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// Directory already exists (init without --force).
    #[error("directory '{path}' already exists (use --force to overwrite)")]
    DirectoryExists { path: PathBuf },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<ReadError> for CliError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Io {
                path: Some(path),
                source,
            } => Self::Io { path, source },
            other => Self::Other(other.to_string()),
        }
    }
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } | Self::StrictFindings { .. } | Self::InvalidSchema(_) => {
                ExitCode::ParseError
            }
            Self::Codegen(_) | Self::PartialGeneration { .. } => ExitCode::GenerationError,
            Self::Config { .. } | Self::NoSchemaFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Cancelled | Self::DirectoryExists { .. } | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { errors, file, .. } => {
                let error_list: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| serde_json::json!({ "message": e.to_string() }))
                    .collect();
                serde_json::json!({
                    "error": "parse_error",
                    "file": file.display().to_string(),
                    "errors": error_list,
                })
            }
            Self::InvalidSchema(e) => serde_json::json!({
                "error": "schema_error",
                "message": e.to_string(),
            }),
            Self::Codegen(e) => {
                let mut json = serde_json::json!({
                    "error": "codegen_error",
                    "message": e.to_string(),
                });
                if let Some(path) = e.path() {
                    json["path"] = path.display().to_string().into();
                }
                json
            }
            Self::PartialGeneration { failed, total } => serde_json::json!({
                "error": "codegen_error",
                "failed": failed,
                "total": total,
                "message": self.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_forge_dsl::Span;

    fn parse_error() -> CliError {
        CliError::Parse {
            errors: vec![DslError::UnrecognizedLine {
                text: "???".into(),
                span: Span::new(0, 3),
            }],
            source_text: "???".into(),
            file: PathBuf::from("shop.dsl"),
        }
    }

    fn write_error() -> CodegenError {
        CodegenError::Write {
            path: PathBuf::from("out/User.java"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }

    #[test]
    fn parse_error_exit_code() {
        assert_eq!(parse_error().exit_code(), ExitCode::ParseError);
        assert_eq!(
            CliError::StrictFindings { count: 2 }.exit_code(),
            ExitCode::ParseError
        );
    }

    #[test]
    fn codegen_error_exit_code() {
        assert_eq!(
            CliError::Codegen(write_error()).exit_code(),
            ExitCode::GenerationError
        );
        assert_eq!(
            CliError::PartialGeneration { failed: 1, total: 3 }.exit_code(),
            ExitCode::GenerationError
        );
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::Config {
            message: "bad config".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn no_schema_files_exit_code() {
        let err = CliError::NoSchemaFiles {
            path: PathBuf::from("schemas/"),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn cancelled_and_other_are_general() {
        assert_eq!(CliError::Cancelled.exit_code(), ExitCode::GeneralError);
        assert_eq!(
            CliError::Other("something".into()).exit_code(),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn read_error_converts_to_io() {
        let read = entity_forge_dsl::parse_file("/nonexistent/shop.dsl").unwrap_err();
        let err = CliError::from(read);
        assert!(matches!(err, CliError::Io { ref path, .. } if path.ends_with("shop.dsl")));
    }

    #[test]
    fn display_directory_exists() {
        let err = CliError::DirectoryExists {
            path: PathBuf::from("my-project"),
        };
        assert!(err.to_string().contains("my-project"));
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    fn to_json_parse_error() {
        let json = parse_error().to_json();
        assert_eq!(json["error"], "parse_error");
        assert_eq!(json["file"], "shop.dsl");
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn to_json_codegen_error_includes_path() {
        let json = CliError::Codegen(write_error()).to_json();
        assert_eq!(json["error"], "codegen_error");
        assert_eq!(json["path"], "out/User.java");
    }

    #[test]
    fn to_json_io_error() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "io_error");
        assert_eq!(json["path"], "/tmp/file");
    }

    #[test]
    fn invalid_schema_is_parse_exit_code() {
        let err = CliError::from(SchemaError::DuplicateEntityName("User".into()));
        assert_eq!(err.exit_code(), ExitCode::ParseError);
        let json = err.to_json();
        assert_eq!(json["error"], "schema_error");
        assert!(json["message"].as_str().unwrap().contains("'User'"));
    }

    #[test]
    fn to_json_other_error() {
        let json = CliError::Other("unexpected".into()).to_json();
        assert_eq!(json["error"], "error");
        assert!(json["message"].as_str().unwrap().contains("unexpected"));
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::ParseError as i32, 3);
        assert_eq!(ExitCode::GenerationError as i32, 4);
    }
}

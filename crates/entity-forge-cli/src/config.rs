use std::path::{Path, PathBuf};

use entity_forge_codegen::GeneratorOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ENTITY_FORGE_CONFIG";

/// CLI configuration loaded from config.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub cli: CliSettings,
}

/// The `[generator]` table: codegen options plus where files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(flatten)]
    pub options: GeneratorOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            options: GeneratorOptions::default(),
        }
    }
}

/// CLI-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    #[serde(default = "default_schema_dir")]
    pub default_schema_dir: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            default_schema_dir: default_schema_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "generated/".to_string()
}

fn default_schema_dir() -> String {
    "schemas/".to_string()
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `ENTITY_FORGE_CONFIG` env var
/// 3. `./config.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/entity-forge/config.toml`
/// 5. `~/.config/entity-forge/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("config.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("entity-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/entity-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Paths to operate on: the explicit ones, or the configured schema dir.
pub fn schema_paths(explicit: &[PathBuf], config: &CliConfig) -> Vec<PathBuf> {
    if explicit.is_empty() {
        vec![PathBuf::from(&config.cli.default_schema_dir)]
    } else {
        explicit.to_vec()
    }
}

/// Resolved generator settings after merging config + CLI flags.
///
/// CLI flags take precedence over config file values.
pub fn resolve_generator(
    config: &CliConfig,
    output: Option<&Path>,
    package: Option<&str>,
) -> (PathBuf, GeneratorOptions) {
    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.generator.output_dir));
    let mut options = config.generator.options.clone();
    if let Some(package) = package {
        options.package = package.to_string();
    }
    (output_dir, options)
}

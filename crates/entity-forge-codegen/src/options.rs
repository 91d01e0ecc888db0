use serde::{Deserialize, Serialize};

/// Package used when none is configured.
pub const DEFAULT_PACKAGE: &str = "com.example.generated";

/// File extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "java";

/// Settings controlling the generated source.
///
/// Deserializes from the `[generator]` table of a config file; any key left
/// out takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Java package declared at the top of each file. Empty omits the line.
    pub package: String,
    /// Extension of generated files, without the dot.
    pub extension: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            indent: 4,
        }
    }
}

impl GeneratorOptions {
    /// File name for an entity: `<Name>.<extension>`.
    pub fn file_name(&self, entity_name: &str) -> String {
        if self.extension.is_empty() {
            entity_name.to_string()
        } else {
            format!("{entity_name}.{}", self.extension)
        }
    }
}

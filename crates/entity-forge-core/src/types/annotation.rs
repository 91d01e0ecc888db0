use serde::{Deserialize, Serialize};

/// A field-level annotation token such as `@NotNull`.
///
/// Only the first word after `@` is kept; arguments are dropped at parse
/// time. Annotations are carried as inert metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(String);

impl Annotation {
    /// Creates an annotation from its name, adding the `@` prefix.
    pub fn new(name: &str) -> Self {
        Self(format!("@{name}"))
    }

    /// Returns the full token including the `@` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the annotation name without the `@` prefix.
    pub fn name(&self) -> &str {
        self.0.strip_prefix('@').unwrap_or(&self.0)
    }

    /// Returns true for a bare `@` with no name.
    pub fn is_empty(&self) -> bool {
        self.name().is_empty()
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

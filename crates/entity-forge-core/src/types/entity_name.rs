use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// The name of an entity, used verbatim as the generated type name.
///
/// No casing rules are enforced. The DSL is permissive, so an empty name is
/// representable here; generation rejects it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Creates a new `EntityName` from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the header carried no name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the name can be joined onto a directory without
    /// leaving it: exactly one normal path component, with no separator of
    /// either platform.
    pub fn is_plain_file_name(&self) -> bool {
        if self.0.contains(|c: char| c == '/' || c == '\\') {
            return false;
        }
        let mut components = Path::new(&self.0).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityName> for String {
    fn from(n: EntityName) -> String {
        n.0
    }
}

impl From<String> for EntityName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

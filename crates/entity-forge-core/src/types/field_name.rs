use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a field, used verbatim as the member and accessor stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new `FieldName` from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the field line had nothing before its `:`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name with its first character upper-cased and the
    /// remainder unchanged, as used in `get<Name>` / `set<Name>`.
    ///
    /// Returns `None` for an empty name.
    pub fn capitalized(&self) -> Option<String> {
        let mut chars = self.0.chars();
        let first = chars.next()?;
        let mut out = String::with_capacity(self.0.len());
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
        Some(out)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldName> for String {
    fn from(n: FieldName) -> String {
        n.0
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

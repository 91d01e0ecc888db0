use serde::{Deserialize, Serialize};

use super::annotation::Annotation;
use super::field_name::FieldName;
use super::field_type::FieldType;

/// A field declaration: name, raw type token, and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: FieldName,
    /// The type token exactly as written in the DSL.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Field {
    /// Creates a new field with no annotations.
    pub fn new(name: impl Into<FieldName>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    /// Creates a new field with annotations, kept in the given order.
    pub fn with_annotations(
        name: impl Into<FieldName>,
        type_name: impl Into<String>,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations,
        }
    }

    /// Classifies the raw type token.
    pub fn field_type(&self) -> FieldType {
        FieldType::from_token(&self.type_name)
    }

    /// Returns true if an annotation with this name (with or without `@`)
    /// is present.
    pub fn has_annotation(&self, name: &str) -> bool {
        let name = name.strip_prefix('@').unwrap_or(name);
        self.annotations.iter().any(|a| a.name() == name)
    }
}

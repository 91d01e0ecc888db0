use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::entity_name::EntityName;
use super::field::Field;

/// One entity definition: a name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: EntityName,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    /// Creates an entity with no fields.
    pub fn new(name: impl Into<EntityName>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Creates an entity with the given fields.
    pub fn with_fields(name: impl Into<EntityName>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Looks up the first field with this name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    /// Checks that the entity can be turned into a class:
    /// - the name is non-empty and a plain file name
    /// - no field name is empty
    /// - no two fields share a name
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyEntityName);
        }
        if !self.name.is_plain_file_name() {
            return Err(SchemaError::InvalidEntityName(self.name.to_string()));
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for f in &self.fields {
            if f.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    entity: self.name.to_string(),
                });
            }
            if !seen.insert(f.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName {
                    entity: self.name.to_string(),
                    field: f.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Validates every entity and checks entity names are unique across the
/// schema. Returns the first problem found, in declaration order.
pub fn validate_schema<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    for entity in entities {
        entity.validate()?;
        if !names.insert(entity.name.as_str()) {
            return Err(SchemaError::DuplicateEntityName(entity.name.to_string()));
        }
    }
    Ok(())
}

use std::fmt;

/// Errors raised when a parsed schema cannot be turned into valid output.
///
/// The parser never produces these: it accepts anything line-shaped. They
/// surface from [`Entity::validate`](crate::types::Entity::validate) and from
/// code generation, which needs non-empty identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// An entity header carried no name (`entity {`).
    EmptyEntityName,
    /// An entity name that is not a single plain path component, such as
    /// one containing `/` or `\`, or one equal to `.` or `..`.
    InvalidEntityName(String),
    /// A field line had nothing before its `:` separator.
    EmptyFieldName { entity: String },
    /// Two entities in one schema share a name.
    DuplicateEntityName(String),
    /// Two fields in one entity share a name.
    DuplicateFieldName { entity: String, field: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntityName => write!(f, "entity name must not be empty"),
            Self::InvalidEntityName(name) => {
                write!(f, "entity name '{name}' is not a plain file name")
            }
            Self::EmptyFieldName { entity } => {
                write!(f, "field name must not be empty in entity '{entity}'")
            }
            Self::DuplicateEntityName(name) => write!(f, "duplicate entity name '{name}'"),
            Self::DuplicateFieldName { entity, field } => {
                write!(f, "duplicate field name '{field}' in entity '{entity}'")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

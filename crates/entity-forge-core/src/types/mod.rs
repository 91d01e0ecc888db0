mod annotation;
mod entity;
mod entity_name;
mod field;
mod field_name;
mod field_type;

pub use annotation::Annotation;
pub use entity::{validate_schema, Entity};
pub use entity_name::EntityName;
pub use field::Field;
pub use field_name::FieldName;
pub use field_type::FieldType;

//! DSL type → Java type mapping.

use entity_forge_core::types::FieldType;

/// A Java type a field can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaType {
    /// Simple name used in declarations.
    pub name: &'static str,
    /// Fully qualified import, for types outside `java.lang`.
    pub import: Option<&'static str>,
}

impl JavaType {
    const fn lang(name: &'static str) -> Self {
        Self { name, import: None }
    }
}

pub const LONG: JavaType = JavaType::lang("Long");
pub const STRING: JavaType = JavaType::lang("String");
pub const INTEGER: JavaType = JavaType::lang("Integer");
pub const BOOLEAN: JavaType = JavaType::lang("Boolean");
pub const OBJECT: JavaType = JavaType::lang("Object");
pub const LOCAL_DATE_TIME: JavaType = JavaType {
    name: "LocalDateTime",
    import: Some("java.time.LocalDateTime"),
};

/// Map a classified field type to its Java type.
///
/// Total: anything outside the known set becomes `Object`.
pub fn java_type(field_type: &FieldType) -> JavaType {
    match field_type {
        FieldType::Long => LONG,
        FieldType::String => STRING,
        FieldType::Integer => INTEGER,
        FieldType::DateTime => LOCAL_DATE_TIME,
        FieldType::Boolean => BOOLEAN,
        FieldType::Other(_) => OBJECT,
    }
}

/// Map a raw DSL type token, case-insensitively.
pub fn java_type_for_token(token: &str) -> JavaType {
    java_type(&FieldType::from_token(token))
}

//! Pure functions rendering entities to Java class source.
//!
//! No I/O. Each function takes entity-forge-core types and returns text.

use std::collections::BTreeSet;

use entity_forge_core::types::{Entity, Field};
use entity_forge_core::SchemaError;

use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use crate::type_map::{java_type, JavaType};

/// Render one entity as a complete Java source file.
///
/// The layout is fixed: package, imports, class declaration, one private
/// member per field, a no-argument constructor, then a getter/setter pair
/// per field. Field order follows declaration order throughout.
///
/// # Errors
///
/// Returns `CodegenError::Schema` if the entity or one of its fields has an
/// empty name, or if the entity name is not a plain file name (it names the
/// output file, which must stay inside the output directory).
pub fn render_entity(entity: &Entity, options: &GeneratorOptions) -> Result<String, CodegenError> {
    if entity.name.is_empty() {
        return Err(schema_error(entity, SchemaError::EmptyEntityName));
    }
    if !entity.name.is_plain_file_name() {
        return Err(schema_error(
            entity,
            SchemaError::InvalidEntityName(entity.name.to_string()),
        ));
    }

    let members = entity
        .fields
        .iter()
        .map(|field| Member::new(entity, field))
        .collect::<Result<Vec<_>, _>>()?;

    let indent = " ".repeat(options.indent);
    let name = entity.name.as_str();
    let mut out = String::new();

    if !options.package.is_empty() {
        out.push_str(&format!("package {};\n\n", options.package));
    }

    let imports: BTreeSet<&str> = members.iter().filter_map(|m| m.java_type.import).collect();
    for import in &imports {
        out.push_str(&format!("import {import};\n"));
    }
    if !imports.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("/**\n * {name} entity.\n */\n"));
    out.push_str(&format!("public class {name} {{\n"));

    for m in &members {
        out.push_str(&format!("{indent}private {} {};\n", m.java_type.name, m.name));
    }
    if !members.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("{indent}public {name}() {{}}\n"));

    for m in &members {
        out.push('\n');
        render_getter(m, &indent, &mut out);
        out.push('\n');
        render_setter(m, &indent, &mut out);
    }

    out.push_str("}\n");
    Ok(out)
}

/// A field resolved to everything the template needs.
struct Member<'a> {
    name: &'a str,
    capitalized: String,
    java_type: JavaType,
}

impl<'a> Member<'a> {
    fn new(entity: &Entity, field: &'a Field) -> Result<Self, CodegenError> {
        let capitalized = field.name.capitalized().ok_or_else(|| {
            schema_error(
                entity,
                SchemaError::EmptyFieldName {
                    entity: entity.name.to_string(),
                },
            )
        })?;
        Ok(Self {
            name: field.name.as_str(),
            capitalized,
            java_type: java_type(&field.field_type()),
        })
    }
}

fn render_getter(m: &Member<'_>, indent: &str, out: &mut String) {
    out.push_str(&format!(
        "{indent}public {} get{}() {{\n",
        m.java_type.name, m.capitalized
    ));
    out.push_str(&format!("{indent}{indent}return {};\n", m.name));
    out.push_str(&format!("{indent}}}\n"));
}

fn render_setter(m: &Member<'_>, indent: &str, out: &mut String) {
    out.push_str(&format!(
        "{indent}public void set{}({} {}) {{\n",
        m.capitalized, m.java_type.name, m.name
    ));
    out.push_str(&format!("{indent}{indent}this.{0} = {0};\n", m.name));
    out.push_str(&format!("{indent}}}\n"));
}

fn schema_error(entity: &Entity, source: SchemaError) -> CodegenError {
    CodegenError::Schema {
        entity: entity.name.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_forge_core::types::Annotation;

    fn user() -> Entity {
        Entity::with_fields(
            "User",
            vec![Field::new("username", "string"), Field::new("age", "integer")],
        )
    }

    fn render(entity: &Entity) -> String {
        render_entity(entity, &GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn renders_user_class_exactly() {
        let expected = "\
package com.example.generated;

/**
 * User entity.
 */
public class User {
    private String username;
    private Integer age;

    public User() {}

    public String getUsername() {
        return username;
    }

    public void setUsername(String username) {
        this.username = username;
    }

    public Integer getAge() {
        return age;
    }

    public void setAge(Integer age) {
        this.age = age;
    }
}
";
        assert_eq!(render(&user()), expected);
    }

    #[test]
    fn members_constructor_and_accessors_in_order() {
        let code = render(&user());
        let positions: Vec<usize> = [
            "private String username;",
            "private Integer age;",
            "public User() {}",
            "getUsername()",
            "setUsername(",
            "getAge()",
            "setAge(",
        ]
        .iter()
        .map(|needle| code.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn datetime_adds_import() {
        let entity = Entity::with_fields("Event", vec![Field::new("at", "DateTime")]);
        let code = render(&entity);
        assert!(code.contains("import java.time.LocalDateTime;\n"));
        assert!(code.contains("private LocalDateTime at;"));
        assert!(code.contains("public LocalDateTime getAt()"));
    }

    #[test]
    fn no_import_without_datetime() {
        assert!(!render(&user()).contains("import "));
    }

    #[test]
    fn datetime_import_emitted_once() {
        let entity = Entity::with_fields(
            "Event",
            vec![Field::new("start", "datetime"), Field::new("end", "datetime")],
        );
        assert_eq!(render(&entity).matches("import java.time.LocalDateTime;").count(), 1);
    }

    #[test]
    fn unknown_type_maps_to_object() {
        let entity = Entity::with_fields("Doc", vec![Field::new("body", "json")]);
        let code = render(&entity);
        assert!(code.contains("private Object body;"));
        assert!(code.contains("public void setBody(Object body)"));
    }

    #[test]
    fn annotations_do_not_affect_output() {
        let plain = user();
        let mut annotated = user();
        annotated.fields[0].annotations = vec![Annotation::new("NotNull")];
        assert_eq!(render(&plain), render(&annotated));
    }

    #[test]
    fn entity_without_fields() {
        let code = render(&Entity::new("Marker"));
        assert!(code.contains("public class Marker {\n    public Marker() {}\n}\n"));
    }

    #[test]
    fn custom_package_and_indent() {
        let options = GeneratorOptions {
            package: "org.acme.model".into(),
            indent: 2,
            ..GeneratorOptions::default()
        };
        let code = render_entity(&user(), &options).unwrap();
        assert!(code.starts_with("package org.acme.model;\n"));
        assert!(code.contains("\n  private String username;\n"));
        assert!(code.contains("\n    return username;\n"));
    }

    #[test]
    fn empty_package_omits_declaration() {
        let options = GeneratorOptions {
            package: String::new(),
            ..GeneratorOptions::default()
        };
        let code = render_entity(&user(), &options).unwrap();
        assert!(code.starts_with("/**"));
    }

    #[test]
    fn empty_field_name_is_an_error() {
        let entity = Entity::with_fields("User", vec![Field::new("", "string")]);
        let err = render_entity(&entity, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Schema {
                source: SchemaError::EmptyFieldName { .. },
                ..
            }
        ));
    }

    #[test]
    fn empty_entity_name_is_an_error() {
        let err = render_entity(&Entity::new(""), &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Schema {
                source: SchemaError::EmptyEntityName,
                ..
            }
        ));
    }

    #[test]
    fn path_like_entity_name_is_an_error() {
        for name in ["/tmp/Pwn", "../Escape", "nested/User", "..", "a\\b"] {
            let err = render_entity(&Entity::new(name), &GeneratorOptions::default()).unwrap_err();
            assert!(
                matches!(
                    err,
                    CodegenError::Schema {
                        source: SchemaError::InvalidEntityName(ref n),
                        ..
                    } if n == name
                ),
                "{name}: {err:?}"
            );
        }
    }
}

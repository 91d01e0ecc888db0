use entity_forge_core::types::{Entity, Field};

/// Print a single entity to DSL text.
///
/// The output uses 4-space indentation and one field per line, so that
/// parsing it back yields an equal entity.
pub fn print(entity: &Entity) -> String {
    let mut output = String::new();
    print_entity(entity, &mut output);
    output
}

/// Print multiple entities to DSL text, separated by blank lines.
pub fn print_all(entities: &[Entity]) -> String {
    let mut output = String::new();
    for (i, entity) in entities.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        print_entity(entity, &mut output);
    }
    output
}

fn print_entity(entity: &Entity, output: &mut String) {
    output.push_str("entity ");
    output.push_str(entity.name.as_str());
    output.push_str(" {\n");

    for field in &entity.fields {
        output.push_str("    ");
        print_field(field, output);
        output.push('\n');
    }

    output.push_str("}\n");
}

fn print_field(field: &Field, output: &mut String) {
    output.push_str(field.name.as_str());
    output.push_str(": ");
    output.push_str(&field.type_name);

    for annotation in &field.annotations {
        output.push(' ');
        output.push_str(annotation.as_str());
    }
}

use proptest::prelude::*;
use entity_forge_dsl::{lint, parse, print_all};

/// Strategy for entity names.
fn entity_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,15}"
}

/// Strategy for field names.
fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,15}"
}

/// Strategy for a DSL type token, known or not.
fn type_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("long".to_string()),
        Just("string".to_string()),
        Just("integer".to_string()),
        Just("datetime".to_string()),
        Just("boolean".to_string()),
        "[A-Za-z][A-Za-z0-9]{0,10}",
    ]
}

/// One entity: name plus (field name, type, optional semicolon) triples.
fn entity_decl() -> impl Strategy<Value = (String, Vec<(String, String, bool)>)> {
    (
        entity_name(),
        proptest::collection::vec((field_name(), type_token(), any::<bool>()), 0..8),
    )
}

fn render(entities: &[(String, Vec<(String, String, bool)>)]) -> String {
    let mut source = String::new();
    for (name, fields) in entities {
        source.push_str(&format!("entity {name} {{\n"));
        for (field, ty, semi) in fields {
            let semi = if *semi { ";" } else { "" };
            source.push_str(&format!("  {field}: {ty}{semi}\n"));
        }
        source.push_str("}\n\n");
    }
    source
}

proptest! {
    /// The parser is total: it never panics, whatever the input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
        let _ = lint(&input);
    }

    /// Entities and their fields come out in source order, one field per
    /// `name: type` line.
    #[test]
    fn order_and_counts_preserved(decls in proptest::collection::vec(entity_decl(), 0..5)) {
        let source = render(&decls);
        let entities = parse(&source);

        prop_assert_eq!(entities.len(), decls.len());
        for (entity, (name, fields)) in entities.iter().zip(decls.iter()) {
            prop_assert_eq!(entity.name.as_str(), name.as_str());
            prop_assert_eq!(entity.fields.len(), fields.len());
            for (parsed, (fname, ty, _)) in entity.fields.iter().zip(fields.iter()) {
                prop_assert_eq!(parsed.name.as_str(), fname.as_str());
                prop_assert_eq!(&parsed.type_name, ty);
            }
        }
    }

    /// A trailing semicolon never changes the parsed field.
    #[test]
    fn semicolon_is_transparent(name in field_name(), ty in type_token()) {
        let with = parse(&format!("entity E {{\n  {name}: {ty};\n}}"));
        let without = parse(&format!("entity E {{\n  {name}: {ty}\n}}"));
        prop_assert_eq!(with, without);
    }

    /// Printing then parsing yields the same entities.
    #[test]
    fn print_parse_round_trip(decls in proptest::collection::vec(entity_decl(), 0..4)) {
        let entities = parse(&render(&decls));
        let reparsed = parse(&print_all(&entities));
        prop_assert_eq!(entities, reparsed);
    }

    /// Blank and comment-only sources produce nothing.
    #[test]
    fn comments_and_blanks_yield_no_entities(
        lines in proptest::collection::vec(prop_oneof![
            Just(String::new()),
            "[ \t]{0,4}",
            "[ \t]{0,4}#[^\n\r]{0,30}",
        ], 0..10),
    ) {
        let source = lines.join("\n");
        prop_assert!(parse(&source).is_empty());
    }
}

use std::fs;

use entity_forge_codegen::{CodegenError, Generator, GeneratorOptions};
use tempfile::TempDir;

const SCHEMA: &str = "\
# accounts
entity User {
    id: long @Id
    username: string @NotNull
    createdAt: datetime
    active: boolean;
}

entity Tag {
    label: string
    weight: decimal
}
";

fn write_schema(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("schema.dsl");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn schema_file_to_class_files() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("generated");

    let written = Generator::new(&out).generate_from_file(&schema).unwrap();
    assert_eq!(written, vec![out.join("User.java"), out.join("Tag.java")]);

    let user = fs::read_to_string(out.join("User.java")).unwrap();
    assert!(user.starts_with("package com.example.generated;\n\nimport java.time.LocalDateTime;\n"));
    for member in [
        "private Long id;",
        "private String username;",
        "private LocalDateTime createdAt;",
        "private Boolean active;",
    ] {
        assert!(user.contains(member), "missing {member}");
    }
    assert!(user.contains("public void setCreatedAt(LocalDateTime createdAt) {"));
    assert!(user.contains("public Boolean getActive() {"));

    let tag = fs::read_to_string(out.join("Tag.java")).unwrap();
    assert!(!tag.contains("import"));
    assert!(tag.contains("private Object weight;"));
}

#[test]
fn generation_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let out = dir.path().join("generated");
    let generator = Generator::new(&out);

    generator.generate_from_file(&schema).unwrap();
    let first = fs::read(out.join("User.java")).unwrap();
    generator.generate_from_file(&schema).unwrap();
    let second = fs::read(out.join("User.java")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn comment_only_schema_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "# nothing here\n\n# still nothing\n");
    let out = dir.path().join("generated");

    let written = Generator::new(&out).generate_from_file(&schema).unwrap();
    assert!(written.is_empty());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn custom_options_change_package_and_extension() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);
    let options: GeneratorOptions =
        toml::from_str("package = \"org.acme.model\"\nextension = \"txt\"\n").unwrap();

    let written = Generator::with_options(dir.path(), options)
        .generate_from_file(&schema)
        .unwrap();
    assert_eq!(written[0], dir.path().join("User.txt"));
    let code = fs::read_to_string(&written[0]).unwrap();
    assert!(code.starts_with("package org.acme.model;"));
}

#[test]
fn lenient_schema_still_generates() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(
        &dir,
        "stray: string\nentity Loose\n  name: string\n  ???\n}\n",
    );
    let out = dir.path().join("generated");

    let written = Generator::new(&out).generate_from_file(&schema).unwrap();
    assert_eq!(written, vec![out.join("Loose.java")]);
    let code = fs::read_to_string(&written[0]).unwrap();
    assert!(code.contains("private String name;"));
}

#[test]
fn entity_named_by_absolute_path_stays_out_of_other_directories() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let target = elsewhere.path().join("Pwn");
    let schema = write_schema(
        &dir,
        &format!("entity {} {{\n  id: long\n}}\n", target.display()),
    );
    let out = dir.path().join("generated");

    let err = Generator::new(&out).generate_from_file(&schema).unwrap_err();
    assert!(matches!(err, CodegenError::Schema { .. }), "{err:?}");
    assert!(!elsewhere.path().join("Pwn.java").exists());
}

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use entity_forge_core::types::{Annotation, Entity, Field};

use crate::error::{DslError, ReadError, Span};
use crate::line::{classify, lines, lines_at, FieldLine, Line, SpannedLine};

/// Single-pass, line-oriented parser for the entity DSL.
///
/// Holds the entities built so far and an index to the one currently
/// receiving fields. Every lenient decision is recorded as a `DslError`
/// but never stops the scan.
struct Parser {
    entities: Vec<Entity>,
    current: Option<usize>,
    /// The current entity has seen its closing `}`.
    closed: bool,
    entity_names: HashSet<String>,
    field_names: HashSet<String>,
    findings: Vec<DslError>,
}

impl Parser {
    fn new() -> Self {
        Self {
            entities: Vec::new(),
            current: None,
            closed: false,
            entity_names: HashSet::new(),
            field_names: HashSet::new(),
            findings: Vec::new(),
        }
    }

    fn feed(&mut self, line: SpannedLine<'_>) {
        match classify(line.text) {
            Line::Blank => {}
            Line::Comment => {
                tracing::trace!(span = %line.span, "skipping comment");
            }
            Line::Header { name, has_brace } => self.start_entity(name, has_brace, line.span),
            Line::Close => {
                if self.current.is_some() {
                    self.closed = true;
                } else {
                    self.findings.push(DslError::UnrecognizedLine {
                        text: line.text.to_string(),
                        span: line.span,
                    });
                }
            }
            Line::Field(field) => self.add_field(field, line.text, line.span),
            Line::Other => {
                let finding = match self.current_name() {
                    Some(entity) => DslError::MissingSeparator {
                        entity: entity.to_string(),
                        text: line.text.to_string(),
                        span: line.span,
                    },
                    None => DslError::UnrecognizedLine {
                        text: line.text.to_string(),
                        span: line.span,
                    },
                };
                tracing::trace!(%finding, "ignoring line");
                self.findings.push(finding);
            }
        }
    }

    fn current_name(&self) -> Option<&str> {
        self.current.map(|idx| self.entities[idx].name.as_str())
    }

    fn start_entity(&mut self, name: &str, has_brace: bool, span: Span) {
        if name.is_empty() {
            self.findings.push(DslError::EmptyEntityName { span: span.clone() });
        }
        if !has_brace {
            self.findings.push(DslError::MissingOpenBrace {
                name: name.to_string(),
                span: span.clone(),
            });
        }
        if !self.entity_names.insert(name.to_string()) {
            self.findings.push(DslError::DuplicateEntityName {
                name: name.to_string(),
                span,
            });
        }

        tracing::debug!(entity = name, "entity header");
        self.entities.push(Entity::new(name));
        self.current = Some(self.entities.len() - 1);
        self.closed = false;
        self.field_names.clear();
    }

    fn add_field(&mut self, field: FieldLine<'_>, text: &str, span: Span) {
        let Some(idx) = self.current else {
            self.findings.push(DslError::FieldOutsideEntity {
                text: text.to_string(),
                span,
            });
            return;
        };
        let entity = self.entities[idx].name.to_string();

        if self.closed {
            self.findings.push(DslError::FieldAfterClose {
                entity: entity.clone(),
                field: field.name.to_string(),
                span: span.clone(),
            });
        }
        if field.name.is_empty() {
            self.findings.push(DslError::EmptyFieldName {
                entity: entity.clone(),
                span: span.clone(),
            });
        } else if !self.field_names.insert(field.name.to_string()) {
            self.findings.push(DslError::DuplicateFieldName {
                entity: entity.clone(),
                name: field.name.to_string(),
                span: span.clone(),
            });
        }
        if field.type_name.is_empty() {
            self.findings.push(DslError::EmptyFieldType {
                entity,
                field: field.name.to_string(),
                span: span.clone(),
            });
        }
        if field.annotations.iter().any(|a| a.is_empty()) {
            self.findings.push(DslError::EmptyAnnotation {
                field: field.name.to_string(),
                span,
            });
        }

        let annotations = field
            .annotations
            .iter()
            .map(|name| Annotation::new(name))
            .collect();
        self.entities[idx].push_field(Field::with_annotations(
            field.name,
            field.type_name,
            annotations,
        ));
    }

    fn finish(self) -> (Vec<Entity>, Vec<DslError>) {
        tracing::debug!(
            entities = self.entities.len(),
            findings = self.findings.len(),
            "parse complete"
        );
        (self.entities, self.findings)
    }
}

/// Parse DSL source text and report what was tolerated, in one pass.
///
/// Equivalent to calling [`parse`] and [`lint`] on the same source.
pub fn parse_with_findings(source: &str) -> (Vec<Entity>, Vec<DslError>) {
    let mut parser = Parser::new();
    for line in lines(source) {
        parser.feed(line);
    }
    parser.finish()
}

/// Parse DSL source text into entities, in declaration order.
///
/// Parsing is lenient and never fails: blank lines and `#` comments are
/// skipped, malformed lines are dropped, and content after an entity's `}`
/// still belongs to that entity. Use [`lint`] to see what was tolerated.
pub fn parse(source: &str) -> Vec<Entity> {
    parse_with_findings(source).0
}

/// Report every lenient decision the parser makes on this source.
///
/// The returned list is in source order and empty for a well-formed schema.
pub fn lint(source: &str) -> Vec<DslError> {
    parse_with_findings(source).1
}

/// Parse DSL source text, rejecting anything [`lint`] would report.
///
/// # Errors
///
/// Returns every finding when the source is not well-formed.
pub fn parse_strict(source: &str) -> Result<Vec<Entity>, Vec<DslError>> {
    let (entities, findings) = parse_with_findings(source);
    if findings.is_empty() {
        Ok(entities)
    } else {
        Err(findings)
    }
}

/// Parse DSL text from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns `ReadError::Io` if reading fails or the input is not valid UTF-8.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<Entity>, ReadError> {
    let mut parser = Parser::new();
    let mut buf = String::new();
    let mut offset = 0;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(ReadError::io)?;
        if read == 0 {
            break;
        }
        for line in lines_at(&buf, offset) {
            parser.feed(line);
        }
        offset += read;
    }

    Ok(parser.finish().0)
}

/// Parse a schema file.
///
/// # Errors
///
/// Returns `ReadError::Io`, carrying the path, if the file cannot be opened
/// or read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Entity>, ReadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading schema");
    let file = File::open(path).map_err(|e| ReadError::io(e).with_path(path.to_path_buf()))?;
    parse_reader(BufReader::new(file)).map_err(|e| e.with_path(path.to_path_buf()))
}

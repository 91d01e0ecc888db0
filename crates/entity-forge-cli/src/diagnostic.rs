use std::fmt;

use entity_forge_dsl::DslError;
use miette::{Diagnostic, LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// `Diagnostic` is implemented by hand because the severity depends on
/// whether the run is strict.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    src: NamedSource<String>,
    span: SourceSpan,
    message: String,
    label: String,
    suggestion: Option<String>,
    severity: Severity,
}

impl Diagnostic for SchemaDiagnostic {
    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.suggestion
            .as_ref()
            .map(|s| Box::new(s) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Convert a `DslError` into a miette `SchemaDiagnostic`.
///
/// Findings render as warnings unless `strict` is set.
pub fn dsl_error_to_diagnostic(
    error: &DslError,
    source: &str,
    filename: &str,
    strict: bool,
) -> SchemaDiagnostic {
    let span = error.span();
    let (label, suggestion) = describe(error);
    SchemaDiagnostic {
        src: NamedSource::new(filename, source.to_string()),
        span: (span.start, span.len()).into(),
        message: error.to_string(),
        label: label.to_string(),
        suggestion,
        severity: if strict {
            Severity::Error
        } else {
            Severity::Warning
        },
    }
}

fn describe(error: &DslError) -> (&'static str, Option<String>) {
    match error {
        DslError::FieldOutsideEntity { .. } => (
            "ignored",
            Some("Move the field inside an `entity Name {` block.".to_string()),
        ),
        DslError::MissingSeparator { .. } => (
            "ignored: no ':'",
            Some("Write fields as `name: type`.".to_string()),
        ),
        DslError::UnrecognizedLine { .. } => (
            "ignored",
            Some("Outside an entity only headers and `#` comments are allowed.".to_string()),
        ),
        DslError::MissingOpenBrace { name, .. } => {
            ("missing '{'", Some(format!("Write `entity {name} {{`.")))
        }
        DslError::EmptyEntityName { .. } => ("no name", None),
        DslError::EmptyFieldName { .. } => (
            "no name before ':'",
            Some("Generation fails for unnamed fields.".to_string()),
        ),
        DslError::EmptyFieldType { .. } => (
            "no type after ':'",
            Some("An empty type is generated as `Object`.".to_string()),
        ),
        DslError::EmptyAnnotation { .. } => ("bare '@'", None),
        DslError::DuplicateEntityName { .. } => (
            "already defined above",
            Some("Both entities write the same output file; the later one wins.".to_string()),
        ),
        DslError::DuplicateFieldName { .. } => (
            "already defined above",
            Some("Remove the duplicate or rename one of the fields.".to_string()),
        ),
        DslError::FieldAfterClose { entity, .. } => (
            "after closing '}'",
            Some(format!("This field is still added to '{entity}'.")),
        ),
        _ => ("here", None),
    }
}

/// Render all findings for a file using miette.
///
/// Returns a vector of `miette::Report` that can be printed to stderr.
pub fn render_diagnostics(
    errors: &[DslError],
    source: &str,
    filename: &str,
    strict: bool,
) -> Vec<miette::Report> {
    errors
        .iter()
        .map(|e| miette::Report::new(dsl_error_to_diagnostic(e, source, filename, strict)))
        .collect()
}

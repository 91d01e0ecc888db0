use std::fmt;
use std::io;
use std::path::PathBuf;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for a zero-width span.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A lenient-parse finding.
///
/// The parser accepts every one of these situations and carries on. They are
/// collected by [`lint`](crate::lint) and turned into hard errors only by
/// [`parse_strict`](crate::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A `name: type` line appeared before any entity header. It is dropped.
    FieldOutsideEntity { text: String, span: Span },

    /// A line inside an entity has no `:` separator. It is dropped.
    MissingSeparator { entity: String, text: String, span: Span },

    /// A line outside any entity that is neither a header nor a comment.
    UnrecognizedLine { text: String, span: Span },

    /// An entity header without a trailing `{`.
    MissingOpenBrace { name: String, span: Span },

    /// An entity header with no name between `entity` and `{`.
    EmptyEntityName { span: Span },

    /// A field line with nothing before its `:`.
    EmptyFieldName { entity: String, span: Span },

    /// A field line with nothing between `:` and the first `@`.
    EmptyFieldType { entity: String, field: String, span: Span },

    /// A bare `@` with no annotation name.
    EmptyAnnotation { field: String, span: Span },

    /// An entity name declared more than once.
    DuplicateEntityName { name: String, span: Span },

    /// A field name declared more than once within one entity.
    DuplicateFieldName { entity: String, name: String, span: Span },

    /// A field declared after the entity's closing `}`. It is attached to
    /// that entity anyway.
    FieldAfterClose { entity: String, field: String, span: Span },
}

impl DslError {
    /// Source span of the offending line.
    pub fn span(&self) -> &Span {
        match self {
            Self::FieldOutsideEntity { span, .. }
            | Self::MissingSeparator { span, .. }
            | Self::UnrecognizedLine { span, .. }
            | Self::MissingOpenBrace { span, .. }
            | Self::EmptyEntityName { span }
            | Self::EmptyFieldName { span, .. }
            | Self::EmptyFieldType { span, .. }
            | Self::EmptyAnnotation { span, .. }
            | Self::DuplicateEntityName { span, .. }
            | Self::DuplicateFieldName { span, .. }
            | Self::FieldAfterClose { span, .. } => span,
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutsideEntity { text, span } => {
                write!(f, "field '{text}' at {span} is not inside an entity")
            }
            Self::MissingSeparator { entity, text, span } => {
                write!(
                    f,
                    "line '{text}' at {span} in entity '{entity}' has no ':' separator"
                )
            }
            Self::UnrecognizedLine { text, span } => {
                write!(
                    f,
                    "unrecognized line '{text}' at {span}: expected an entity header or a comment"
                )
            }
            Self::MissingOpenBrace { name, span } => {
                write!(f, "entity header '{name}' at {span} is missing '{{'")
            }
            Self::EmptyEntityName { span } => {
                write!(f, "entity header at {span} has no name")
            }
            Self::EmptyFieldName { entity, span } => {
                write!(f, "field at {span} in entity '{entity}' has no name")
            }
            Self::EmptyFieldType {
                entity,
                field,
                span,
            } => {
                write!(f, "field '{entity}.{field}' at {span} has no type")
            }
            Self::EmptyAnnotation { field, span } => {
                write!(f, "empty annotation on field '{field}' at {span}")
            }
            Self::DuplicateEntityName { name, span } => {
                write!(f, "duplicate entity name '{name}' at {span}")
            }
            Self::DuplicateFieldName { entity, name, span } => {
                write!(f, "duplicate field name '{entity}.{name}' at {span}")
            }
            Self::FieldAfterClose {
                entity,
                field,
                span,
            } => {
                write!(
                    f,
                    "field '{field}' at {span} follows the closing '}}' of entity '{entity}'"
                )
            }
        }
    }
}

impl std::error::Error for DslError {}

/// Failure to read schema source.
#[derive(Debug)]
#[non_exhaustive]
pub enum ReadError {
    /// The input could not be opened or read, or was not valid UTF-8.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
}

impl ReadError {
    pub(crate) fn io(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Attaches the file path to an error raised while reading it.
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            Self::Io { source, .. } => Self::Io {
                path: Some(path),
                source,
            },
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read schema {}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "failed to read schema: {source}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(10, 20);
        assert_eq!(span.to_string(), "10..20");
        assert_eq!(span.len(), 10);
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn error_display_field_outside_entity() {
        let err = DslError::FieldOutsideEntity {
            text: "age: integer".into(),
            span: Span::new(0, 12),
        };
        let msg = err.to_string();
        assert!(msg.contains("age: integer"));
        assert!(msg.contains("not inside an entity"));
    }

    #[test]
    fn error_display_missing_brace() {
        let err = DslError::MissingOpenBrace {
            name: "User".into(),
            span: Span::new(0, 11),
        };
        assert_eq!(
            err.to_string(),
            "entity header 'User' at 0..11 is missing '{'"
        );
    }

    #[test]
    fn error_display_field_after_close() {
        let err = DslError::FieldAfterClose {
            entity: "User".into(),
            field: "email".into(),
            span: Span::new(40, 53),
        };
        let msg = err.to_string();
        assert!(msg.contains("closing '}'"));
        assert!(msg.contains("'User'"));
    }

    #[test]
    fn error_display_duplicates() {
        let err = DslError::DuplicateFieldName {
            entity: "User".into(),
            name: "age".into(),
            span: Span::new(5, 6),
        };
        assert!(err.to_string().contains("'User.age'"));

        let err = DslError::DuplicateEntityName {
            name: "User".into(),
            span: Span::new(5, 6),
        };
        assert!(err.to_string().contains("duplicate entity name 'User'"));
    }

    #[test]
    fn span_accessor_covers_variants() {
        let err = DslError::EmptyEntityName {
            span: Span::new(2, 9),
        };
        assert_eq!(err.span(), &Span::new(2, 9));
    }

    #[test]
    fn read_error_display_with_path() {
        let err = ReadError::io(io::Error::new(io::ErrorKind::NotFound, "not found"))
            .with_path(PathBuf::from("schemas/app.dsl"));
        let msg = err.to_string();
        assert!(msg.contains("schemas/app.dsl"));
        assert!(msg.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn read_error_display_without_path() {
        let err = ReadError::io(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert_eq!(err.to_string(), "failed to read schema: bad utf-8");
    }
}

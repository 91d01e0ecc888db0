use crate::error::Span;

const ENTITY_KEYWORD: &str = "entity ";

/// A trimmed source line paired with its span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SpannedLine<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> SpannedLine<'a> {
    /// Trims `raw` (one line without its terminator) that starts at byte
    /// `offset` of the source.
    pub fn new(raw: &'a str, offset: usize) -> Self {
        let start = offset + (raw.len() - raw.trim_start().len());
        let text = raw.trim();
        Self {
            text,
            span: Span::new(start, start + text.len()),
        }
    }
}

/// Splits source text into trimmed lines with byte spans.
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = SpannedLine<'_>> {
    lines_at(source, 0)
}

/// Like [`lines`], for a chunk that starts at byte `offset` of the source.
pub(crate) fn lines_at(chunk: &str, offset: usize) -> impl Iterator<Item = SpannedLine<'_>> {
    let mut rest = chunk;
    let mut offset = offset;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (text, consumed) = match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], end + terminator)
            }
            None => (rest, rest.len()),
        };
        let line = SpannedLine::new(text, offset);
        offset += consumed;
        rest = &rest[consumed..];
        Some(line)
    })
}

/// The syntactic shape of one trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    /// `entity <Name> {`
    Header { name: &'a str, has_brace: bool },
    /// Any line starting with `}`.
    Close,
    /// `name: type @Ann ...;`
    Field(FieldLine<'a>),
    /// Anything else.
    Other,
}

/// The pieces of a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldLine<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    /// Annotation names without the `@` prefix, truncated at the first space.
    pub annotations: Vec<&'a str>,
}

/// Classifies a trimmed line.
///
/// Checks run in a fixed order: blank, comment, entity header, close brace,
/// field. A header therefore wins over a field even when it contains `:`.
pub(crate) fn classify(text: &str) -> Line<'_> {
    if text.is_empty() {
        return Line::Blank;
    }
    if text.starts_with('#') {
        return Line::Comment;
    }
    if let Some(rest) = text.strip_prefix(ENTITY_KEYWORD) {
        let (name, has_brace) = match rest.strip_suffix('{') {
            Some(name) => (name, true),
            None => (rest, false),
        };
        return Line::Header {
            name: name.trim(),
            has_brace,
        };
    }
    if text.starts_with('}') {
        return Line::Close;
    }
    match text.split_once(':') {
        Some((name, rest)) => Line::Field(split_field(name.trim(), rest.trim())),
        None => Line::Other,
    }
}

fn split_field<'a>(name: &'a str, rest: &'a str) -> FieldLine<'a> {
    let rest = rest.strip_suffix(';').unwrap_or(rest);

    let mut segments: Vec<&str> = rest.split('@').collect();
    // Zero-length trailing segments carry no annotation text at all.
    while segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }

    let type_name = segments[0].trim();
    let annotations = segments[1..]
        .iter()
        .map(|segment| {
            let segment = segment.trim();
            match segment.find(' ') {
                Some(idx) => &segment[..idx],
                None => segment,
            }
        })
        .collect();

    FieldLine {
        name,
        type_name,
        annotations,
    }
}

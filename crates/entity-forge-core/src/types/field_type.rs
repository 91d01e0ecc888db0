use serde::{Deserialize, Serialize};

/// Classification of a DSL type token.
///
/// The closed set of known tokens is matched case-insensitively. Anything
/// else is kept as `Other` with the original token, so classification is
/// total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "token")]
pub enum FieldType {
    Long,
    String,
    Integer,
    DateTime,
    Boolean,
    Other(String),
}

impl FieldType {
    /// Classifies a raw DSL type token.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "long" => Self::Long,
            "string" => Self::String,
            "integer" => Self::Integer,
            "datetime" => Self::DateTime,
            "boolean" => Self::Boolean,
            _ => Self::Other(token.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_any_case() {
        let cases = [
            ("long", FieldType::Long),
            ("LONG", FieldType::Long),
            ("string", FieldType::String),
            ("String", FieldType::String),
            ("integer", FieldType::Integer),
            ("InTeGeR", FieldType::Integer),
            ("datetime", FieldType::DateTime),
            ("DateTime", FieldType::DateTime),
            ("boolean", FieldType::Boolean),
            ("BOOLEAN", FieldType::Boolean),
        ];
        for (token, expected) in cases {
            assert_eq!(FieldType::from_token(token), expected, "token {token}");
        }
    }

    #[test]
    fn unknown_tokens_keep_original_text() {
        assert_eq!(
            FieldType::from_token("Decimal"),
            FieldType::Other("Decimal".into())
        );
        assert_eq!(FieldType::from_token(""), FieldType::Other(String::new()));
        assert_eq!(FieldType::from_token("int"), FieldType::Other("int".into()));
    }

    #[test]
    fn serde_roundtrip() {
        for ft in [FieldType::Long, FieldType::Other("uuid".into())] {
            let json = serde_json::to_string(&ft).unwrap();
            let back: FieldType = serde_json::from_str(&json).unwrap();
            assert_eq!(ft, back);
        }
    }
}

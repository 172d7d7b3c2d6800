//! Purpose: Provide the JSON decode entrypoint for decoded input text.
//! Exports: `parse_document`, `ParseFailureCategory`, `categorize_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Failures map to `ErrorKind::Parse` with line/column kept in the source error.
//! Notes: Categories feed debug logs only; the user-facing line stays uniform.

use serde_json::Value;
use serde_json::error::Category;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn parse_document(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|err| {
        tracing::debug!(category = categorize_error(&err).as_str(), "json parse failed");
        Error::new(ErrorKind::Parse)
            .with_message("invalid JSON")
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{ParseFailureCategory, categorize_error, parse_document};
    use crate::core::error::ErrorKind;
    use serde_json::{Value, json};

    #[test]
    fn parses_array_and_object_roots() {
        assert_eq!(
            parse_document(r#"[{"name": "widget"}]"#).expect("array"),
            json!([{"name": "widget"}])
        );
        assert_eq!(
            parse_document(r#"{"status": 404}"#).expect("object"),
            json!({"status": 404})
        );
    }

    #[test]
    fn syntax_and_eof_are_categorized() {
        let syntax = serde_json::from_str::<Value>(r#"{"a":}"#).unwrap_err();
        assert_eq!(categorize_error(&syntax), ParseFailureCategory::Syntax);

        let eof = serde_json::from_str::<Value>(r#"[{"a": 1}"#).unwrap_err();
        assert_eq!(categorize_error(&eof), ParseFailureCategory::Eof);
    }

    #[test]
    fn failure_carries_position() {
        let err = parse_document("[1,\n 2,,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = parse_document("").unwrap_err();
        assert!(err.to_string().starts_with("Parse: invalid JSON"));
    }
}

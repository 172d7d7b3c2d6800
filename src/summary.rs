//! Purpose: Turn a parsed document into the printed summary.
//! Exports: `Summary`, `Interrupted`, `summarize`, `summarize_bytes`, `summarize_path`, `field`.
//! Role: The whole read → decode → parse → shape-check pipeline behind one call.
//! Invariants: Only "is the root an array?" is checked; records and reports are not validated.
//! Invariants: Field lookups on a non-object fail instead of defaulting.
//! Invariants: A failure keeps the lines already printed before it, in order.

use std::path::Path;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::{input, utf16};
use crate::json::parse::parse_document;
use crate::pyfmt::render_field;

const ERROR_HEADER: &str = "Error Response:";

/// Rendered outcome of one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Summary {
    Record {
        name: String,
        kind: String,
    },
    EmptyList,
    ErrorReport {
        status: String,
        error: String,
        message: String,
    },
}

impl Summary {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Summary::Record { name, kind } => vec![format!("Name: {name}"), format!("Type: {kind}")],
            Summary::EmptyList => vec!["Empty list returned".to_string()],
            Summary::ErrorReport {
                status,
                error,
                message,
            } => vec![
                ERROR_HEADER.to_string(),
                format!("Status: {status}"),
                format!("Error: {error}"),
                format!("Message: {message}"),
            ],
        }
    }
}

/// A failed run: the lines emitted before the failure, then the failure itself.
#[derive(Debug)]
pub struct Interrupted {
    pub printed: Vec<String>,
    pub error: Error,
}

impl Interrupted {
    fn after_header(error: Error) -> Self {
        Self {
            printed: vec![ERROR_HEADER.to_string()],
            error,
        }
    }

    pub fn with_path(self, path: &Path) -> Self {
        Self {
            printed: self.printed,
            error: self.error.with_path(path),
        }
    }
}

impl From<Error> for Interrupted {
    fn from(error: Error) -> Self {
        Self {
            printed: Vec::new(),
            error,
        }
    }
}

/// Looks up `key`, treating an absent key as `None`. Fails when `value` is not an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Result<Option<&'a Value>, Error> {
    match value {
        Value::Object(map) => Ok(map.get(key)),
        other => Err(Error::new(ErrorKind::Shape).with_message(format!(
            "cannot read field '{key}' from {}",
            type_name(other)
        ))),
    }
}

pub fn summarize(document: &Value) -> Result<Summary, Interrupted> {
    match document {
        Value::Array(items) => match items.first() {
            Some(record) => {
                tracing::debug!(len = items.len(), "root is a non-empty array");
                Ok(Summary::Record {
                    name: render_field(field(record, "name")?),
                    kind: render_field(field(record, "type")?),
                })
            }
            None => {
                tracing::debug!("root is an empty array");
                Ok(Summary::EmptyList)
            }
        },
        report => {
            tracing::debug!(root = type_name(report), "treating root as error report");
            // The header is out before the first lookup can fail.
            let fields = || -> Result<Summary, Error> {
                Ok(Summary::ErrorReport {
                    status: render_field(field(report, "status")?),
                    error: render_field(field(report, "error")?),
                    message: render_field(field(report, "message")?),
                })
            };
            fields().map_err(Interrupted::after_header)
        }
    }
}

pub fn summarize_bytes(bytes: &[u8]) -> Result<Summary, Interrupted> {
    let text = utf16::decode(bytes)?;
    let document = parse_document(&text)?;
    summarize(&document)
}

pub fn summarize_path(path: &Path) -> Result<Summary, Interrupted> {
    let bytes = input::read_input(path)?;
    summarize_bytes(&bytes).map_err(|failure| failure.with_path(path))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

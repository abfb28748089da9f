//! Multipart form encoding.
//!
//! Letters, postcards, checks and bank accounts accept file uploads, which
//! PostGrid only takes as `multipart/form-data`. The create request is first
//! serialized to JSON and then flattened into text fields, with nested
//! objects written as `key[sub]` the way PostGrid's form parser expects.

use serde::Serialize;
use serde_json::Value;

use super::error::ClientError;

/// Filename used for uploaded PDF documents.
pub const PDF_FILENAME: &str = "upload-content.pdf";

/// MIME type of uploaded PDF documents.
pub const PDF_MIME: &str = "application/pdf";

/// Fallback MIME type for uploads of unknown type.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// A file attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Raw file contents.
    pub bytes: Vec<u8>,

    /// Filename reported to the server.
    pub filename: String,

    /// MIME type of the contents.
    pub mime: String,
}

impl FilePart {
    /// Creates a new file part.
    #[must_use]
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime: mime.into(),
        }
    }

    /// Creates a PDF upload named `upload-content.pdf`.
    #[must_use]
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self::new(bytes, PDF_FILENAME, PDF_MIME)
    }
}

/// A single multipart field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File upload.
    File(FilePart),
}

/// An ordered multipart form.
///
/// Kept separate from `reqwest::multipart::Form` so the encoded fields can
/// be inspected before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a serializable create request.
    ///
    /// Keys listed in `nested` are flattened one level into `key[sub]`
    /// fields when they hold an object; `null` values are dropped at every
    /// level.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized to JSON.
    pub fn encode<T: Serialize>(value: &T, nested: &[&str]) -> Result<Self, ClientError> {
        let value =
            serde_json::to_value(value).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(Self::from_json(&value, nested))
    }

    /// Encodes an already serialized JSON object.
    ///
    /// Anything other than an object yields an empty form.
    #[must_use]
    pub fn from_json(value: &Value, nested: &[&str]) -> Self {
        let mut form = Self::new();
        let Some(object) = value.as_object() else {
            return form;
        };

        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::Object(inner) if nested.contains(&key.as_str()) => {
                    for (sub, sub_value) in inner {
                        if let Some(text) = render(sub_value) {
                            form = form.text(format!("{}[{}]", key, sub), text);
                        }
                    }
                }
                other => {
                    if let Some(text) = render(other) {
                        form = form.text(key.clone(), text);
                    }
                }
            }
        }

        form
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.fields.push((name.into(), FormValue::File(part)));
        self
    }

    /// Returns the encoded fields in order.
    #[must_use]
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// Returns the first text value stored under `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the first file stored under `name`.
    #[must_use]
    pub fn file_part(&self, name: &str) -> Option<&FilePart> {
        self.fields.iter().find_map(|(key, value)| match value {
            FormValue::File(part) if key == name => Some(part),
            _ => None,
        })
    }

    /// Returns true if a field named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts into a reqwest multipart form.
    pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(part) => {
                    let part = reqwest::multipart::Part::bytes(part.bytes)
                        .file_name(part.filename)
                        .mime_str(&part.mime)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Renders a JSON value as a form text value.
fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| render(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

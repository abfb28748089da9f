//! Postcard types for the PostGrid SDK.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contact::{Contact, Recipient};
use super::document::Document;
use super::null_as_default;

/// Postcard dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostcardSize {
    /// 6" x 4".
    #[default]
    #[serde(rename = "6x4")]
    Small,
    /// 9" x 6".
    #[serde(rename = "9x6")]
    Medium,
    /// 11" x 6".
    #[serde(rename = "11x6")]
    Large,
}

/// A postcard stored at PostGrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Postcard {
    /// Postcard ID, e.g. `postcard_...`.
    pub id: String,

    /// Always `postcard`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// True for live-mode records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Date the postcard is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Size, e.g. `6x4`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,

    /// Recipient.
    pub to: Contact,

    /// Sender, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Contact>,

    /// Front side HTML.
    #[serde(rename = "frontHTML", skip_serializing_if = "Option::is_none")]
    pub front_html: Option<String>,

    /// Back side HTML.
    #[serde(rename = "backHTML", skip_serializing_if = "Option::is_none")]
    pub back_html: Option<String>,

    /// Front side template ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_template: Option<String>,

    /// Back side template ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_template: Option<String>,

    /// URL of the uploaded PDF.
    #[serde(rename = "uploadedPDF", skip_serializing_if = "Option::is_none")]
    pub uploaded_pdf: Option<String>,

    /// Preview URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Values substituted into templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_variables: Option<Value>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for creating a postcard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcardCreate {
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date to send the postcard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Size.
    pub size: PostcardSize,

    /// Recipient.
    pub to: Recipient,

    /// Sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Recipient>,

    /// Front side HTML.
    #[serde(rename = "frontHTML", skip_serializing_if = "Option::is_none")]
    pub front_html: Option<String>,

    /// Back side HTML.
    #[serde(rename = "backHTML", skip_serializing_if = "Option::is_none")]
    pub back_html: Option<String>,

    /// Front side template ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_template: Option<String>,

    /// Back side template ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_template: Option<String>,

    /// Two-page PDF (front, back).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<Document>,

    /// Values substituted into templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_variables: Option<Value>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Send via express shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub express: Option<bool>,
}

impl PostcardCreate {
    /// Creates postcard parameters for a recipient.
    #[must_use]
    pub fn new(size: PostcardSize, to: impl Into<Recipient>) -> Self {
        Self {
            size,
            to: to.into(),
            ..Default::default()
        }
    }

    /// Sets the sender.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<Recipient>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sets front and back HTML.
    #[must_use]
    pub fn with_html(mut self, front: impl Into<String>, back: impl Into<String>) -> Self {
        self.front_html = Some(front.into());
        self.back_html = Some(back.into());
        self
    }

    /// Sets the PDF content.
    #[must_use]
    pub fn with_pdf(mut self, pdf: impl Into<Document>) -> Self {
        self.pdf = Some(pdf.into());
        self
    }

    /// Returns the PDF bytes if the postcard needs a multipart upload.
    #[must_use]
    pub fn upload(&self) -> Option<&[u8]> {
        self.pdf.as_ref().and_then(Document::as_bytes)
    }
}

//! Letter types for the PostGrid SDK.
//!
//! A letter is built from inline HTML, a template, or a PDF (URL or upload).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contact::{Contact, Recipient};
use super::document::Document;
use super::null_as_default;

/// Where the recipient address is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressPlacement {
    /// Printed on the top of the first page.
    TopFirstPage,
    /// Printed on an extra blank page inserted before the content.
    #[default]
    InsertBlankPage,
}

/// A letter stored at PostGrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    /// Letter ID, e.g. `letter_...`.
    pub id: String,

    /// Always `letter`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// True for live-mode records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Processing status, e.g. `ready`, `printing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Date the letter is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Recipient.
    pub to: Contact,

    /// Sender.
    pub from: Contact,

    /// Inline HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Template ID used for the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// URL of the uploaded PDF.
    #[serde(rename = "uploadedPDF", skip_serializing_if = "Option::is_none")]
    pub uploaded_pdf: Option<String>,

    /// Address placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_placement: Option<String>,

    /// Printed in color.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: bool,

    /// Printed double sided.
    #[serde(default, deserialize_with = "null_as_default")]
    pub double_sided: bool,

    /// Preview URL of the rendered letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Values substituted into the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_variables: Option<Value>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for creating a letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterCreate {
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date to send the letter; defaults to today at PostGrid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Recipient.
    pub to: Recipient,

    /// Sender.
    pub from: Recipient,

    /// Inline HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Template ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// ID of a previously uploaded PDF.
    #[serde(rename = "uploadedPDF", skip_serializing_if = "Option::is_none")]
    pub uploaded_pdf: Option<String>,

    /// Address placement; defaults to `insert_blank_page`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_placement: Option<AddressPlacement>,

    /// Print in color; defaults to false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Print double sided; defaults to false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_sided: Option<bool>,

    /// PDF content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<Document>,

    /// Values substituted into the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_variables: Option<Value>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl LetterCreate {
    /// Creates letter parameters for the given recipient and sender.
    #[must_use]
    pub fn new(to: impl Into<Recipient>, from: impl Into<Recipient>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            ..Default::default()
        }
    }

    /// Sets inline HTML content.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets the template ID.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the PDF content.
    #[must_use]
    pub fn with_pdf(mut self, pdf: impl Into<Document>) -> Self {
        self.pdf = Some(pdf.into());
        self
    }

    /// Fills in PostGrid's print defaults for unset options.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.color.get_or_insert(false);
        self.double_sided.get_or_insert(false);
        self.address_placement
            .get_or_insert(AddressPlacement::InsertBlankPage);
        self
    }

    /// Returns the PDF bytes if the letter needs a multipart upload.
    #[must_use]
    pub fn upload(&self) -> Option<&[u8]> {
        self.pdf.as_ref().and_then(Document::as_bytes)
    }
}

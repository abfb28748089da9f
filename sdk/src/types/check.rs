//! Check (cheque) types for the PostGrid SDK.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contact::{Contact, Recipient};
use super::document::Document;
use super::null_as_default;

/// A check stored at PostGrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    /// Check ID, e.g. `cheque_...`.
    pub id: String,

    /// Always `cheque`.
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

    /// Date the check is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Payee.
    pub to: Contact,

    /// Payer.
    pub from: Contact,

    /// Preview URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Bank account ID the check draws on.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bank_account: String,

    /// Currency, e.g. `USD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,

    /// Amount in cents.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: u64,

    /// Memo line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Check number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u64,

    /// Message printed on the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// HTML of the attached letter.
    #[serde(rename = "letterHTML", skip_serializing_if = "Option::is_none")]
    pub letter_html: Option<String>,

    /// Template ID of the attached letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_template: Option<String>,

    /// URL of the uploaded letter PDF.
    #[serde(rename = "letterUploadedPDF", skip_serializing_if = "Option::is_none")]
    pub letter_uploaded_pdf: Option<String>,

    /// Values substituted into templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_variables: Option<Value>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Check {
    /// Returns the amount in whole currency units.
    #[must_use]
    pub fn amount_major(&self) -> f64 {
        self.amount as f64 / 100.0
    }
}

/// Parameters for creating a check.
///
/// Checks are always sent as a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCreate {
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date to send the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,

    /// Payee.
    pub to: Recipient,

    /// Payer.
    pub from: Recipient,

    /// Bank account ID.
    pub bank_account: String,

    /// Currency, e.g. `USD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Amount in cents.
    pub amount: u64,

    /// Memo line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Check number; PostGrid assigns one if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    /// Message printed on the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// HTML of an attached letter.
    #[serde(rename = "letterHTML", skip_serializing_if = "Option::is_none")]
    pub letter_html: Option<String>,

    /// Template ID of an attached letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_template: Option<String>,

    /// PDF of an attached letter.
    #[serde(rename = "letterPDF", skip_serializing_if = "Option::is_none")]
    pub letter_pdf: Option<Document>,

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

impl CheckCreate {
    /// Creates check parameters.
    #[must_use]
    pub fn new(
        to: impl Into<Recipient>,
        from: impl Into<Recipient>,
        bank_account: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            bank_account: bank_account.into(),
            amount,
            ..Default::default()
        }
    }

    /// Sets the memo line.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Attaches a letter PDF.
    #[must_use]
    pub fn with_letter_pdf(mut self, pdf: impl Into<Document>) -> Self {
        self.letter_pdf = Some(pdf.into());
        self
    }

    /// Returns the letter PDF bytes if one is uploaded.
    #[must_use]
    pub fn upload(&self) -> Option<&[u8]> {
        self.letter_pdf.as_ref().and_then(Document::as_bytes)
    }
}

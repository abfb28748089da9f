//! Bank account types for the PostGrid SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::SignatureImage;
use super::null_as_default;

/// A bank account stored at PostGrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// Bank account ID, e.g. `bank_...`.
    pub id: String,

    /// Always `bank_account`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// True for live-mode records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bank name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bank_name: String,

    /// First line of the bank's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_primary_line: Option<String>,

    /// Second line of the bank's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_secondary_line: Option<String>,

    /// Country code of the bank.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bank_country_code: String,

    /// Canadian transit number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_number: Option<String>,

    /// Canadian route number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_number: Option<String>,

    /// US routing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,

    /// Last four digits of the account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number_last4: Option<String>,

    /// URL of the signature image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_image: Option<String>,

    /// Signature rendered as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_text: Option<String>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for creating a bank account.
///
/// Sent as a multipart form; `signature_image` becomes a file part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountCreate {
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bank name.
    pub bank_name: String,

    /// First line of the bank's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_primary_line: Option<String>,

    /// Second line of the bank's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_secondary_line: Option<String>,

    /// Country code of the bank, e.g. `US` or `CA`.
    pub bank_country_code: String,

    /// Canadian transit number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_number: Option<String>,

    /// Canadian route number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_number: Option<String>,

    /// US routing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,

    /// Full account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Signature image upload.
    #[serde(skip)]
    pub signature_image: Option<SignatureImage>,

    /// Signature rendered as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_text: Option<String>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl BankAccountCreate {
    /// Creates bank account parameters.
    #[must_use]
    pub fn new(bank_name: impl Into<String>, bank_country_code: impl Into<String>) -> Self {
        Self {
            bank_name: bank_name.into(),
            bank_country_code: bank_country_code.into(),
            ..Default::default()
        }
    }

    /// Sets US routing and account numbers.
    #[must_use]
    pub fn with_us_account(
        mut self,
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        self.routing_number = Some(routing_number.into());
        self.account_number = Some(account_number.into());
        self
    }

    /// Sets the signature text.
    #[must_use]
    pub fn with_signature_text(mut self, text: impl Into<String>) -> Self {
        self.signature_text = Some(text.into());
        self
    }

    /// Sets the signature image.
    #[must_use]
    pub fn with_signature_image(mut self, image: SignatureImage) -> Self {
        self.signature_image = Some(image);
        self
    }
}

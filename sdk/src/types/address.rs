//! Address verification types for the PostGrid SDK.
//!
//! The address service wraps every answer in `{status, message, data}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Statuses that count as a verified address.
pub const VERIFIED_STATUSES: [&str; 2] = ["verified", "corrected"];

/// A postal address, as sent to or returned by the address service.
///
/// Every field is optional so the same type serves partial inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Province or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_or_state: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_or_zip: Option<String>,

    /// ZIP+4 suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,

    /// Firm name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,

    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// Verification status: `verified`, `corrected` or `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Per-field verification errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl Address {
    /// Creates a structured address from its main parts.
    #[must_use]
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        province_or_state: impl Into<String>,
        postal_or_zip: impl Into<String>,
    ) -> Self {
        Self {
            line1: Some(line1.into()),
            city: Some(city.into()),
            province_or_state: Some(province_or_state.into()),
            postal_or_zip: Some(postal_or_zip.into()),
            ..Default::default()
        }
    }

    /// Sets the country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Returns true if the status is `verified` or `corrected`.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| VERIFIED_STATUSES.contains(&s))
    }
}

/// Address given as freeform text or as structured fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressInput {
    /// Freeform text, e.g. `3288 Tara Ln, Indianapolis, IN 46224`.
    Freeform(String),
    /// Structured address.
    Structured(Address),
}

impl From<&str> for AddressInput {
    fn from(address: &str) -> Self {
        Self::Freeform(address.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(address: String) -> Self {
        Self::Freeform(address)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self::Structured(address)
    }
}

/// Address service envelope: `{status, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressResponse<T> {
    /// `success` or `error`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Human readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    /// Response data.
    pub data: T,
}

/// Free lookup usage of the address API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupInfo {
    /// Lookups used so far.
    #[serde(default, deserialize_with = "null_as_default")]
    pub used: u64,

    /// Free lookups included.
    #[serde(default, deserialize_with = "null_as_default")]
    pub free_limit: u64,
}

impl LookupInfo {
    /// Returns the free lookups left.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.free_limit.saturating_sub(self.used)
    }
}

/// City and state for a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityState {
    /// City.
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,

    /// Province or state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub province_or_state: String,

    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Result of verifying a single address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// True if the address came back `verified` or `corrected`.
    pub verified: bool,

    /// Full service response.
    pub response: AddressResponse<Address>,
}

impl Verification {
    /// Returns the verified (possibly corrected) address.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.response.data
    }
}

//! Address verification resource.
//!
//! Uses the address key rather than the print-mail key. Every answer comes
//! back as `{status, message, data}`; completion and batch answers are
//! reshaped so `data` holds plain [`Address`] records.

use serde_json::{json, Map, Value};

use super::{join_route, ADDRESS_ROUTE};
use crate::client::http::decode;
use crate::client::{Call, ClientError, KeyKind, PostGrid};
use crate::types::{
    Address, AddressInput, AddressResponse, CityState, LookupInfo, Verification,
};

/// Country used for completions when none is given.
pub const DEFAULT_COUNTRY: &str = "US";

/// Handle for `v1/addver`.
#[derive(Debug, Clone, Copy)]
pub struct AddressApi<'a> {
    client: &'a PostGrid,
}

impl<'a> AddressApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Returns how many free lookups the address key has used.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn lookup_info(&self) -> Result<AddressResponse<LookupInfo>, ClientError> {
        self.client
            .send(Call::get(KeyKind::Addr, ADDRESS_ROUTE))
            .await
    }

    /// Verifies a freeform or structured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    /// An address that fails verification is not an error; check
    /// [`Verification::verified`].
    pub async fn verify(
        &self,
        address: impl Into<AddressInput>,
    ) -> Result<Verification, ClientError> {
        let call = post(&["verifications"]).json(&json!({ "address": address.into() }))?;
        let response: AddressResponse<Address> = self.client.send(call).await?;
        Ok(Verification {
            verified: response.data.is_verified(),
            response,
        })
    }

    /// Looks up completion previews for a partial street.
    ///
    /// Previews carry the street, city and state only.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn autocomplete_previews(
        &self,
        street: &str,
        country: Option<&str>,
    ) -> Result<AddressResponse<Vec<Address>>, ClientError> {
        let call = Call::get(KeyKind::Addr, join_route(ADDRESS_ROUTE, &["completions"]))
            .query("properCase", true)
            .query("partialStreet", street)
            .query("countryFilter", country.unwrap_or(DEFAULT_COUNTRY))
            .query("provInsteadOfPC", true);

        let payload = self.client.fire(call).await?;
        decode(payload.map(|p| reshape_list(p, "preview", PREVIEW_FIELDS)))
    }

    /// Completes a partial address, e.g. one returned as a preview.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn autocomplete_address(
        &self,
        address: &Address,
    ) -> Result<AddressResponse<Vec<Address>>, ClientError> {
        let call = post(&["completions"]).json(&json!({
            "partialStreet": address.line1,
            "cityFilter": address.city,
            "stateFilter": address.province_or_state,
            "pcFilter": address.postal_or_zip,
            "countryFilter": address.country.as_deref().unwrap_or(DEFAULT_COUNTRY),
        }))?;

        let payload = self.client.fire(call).await?;
        decode(payload.map(|p| reshape_list(p, "address", COMPLETION_FIELDS)))
    }

    /// Verifies a batch of addresses in one call.
    ///
    /// The returned `data` holds the verified address for each input, in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn batch_verify(
        &self,
        addresses: Vec<AddressInput>,
    ) -> Result<AddressResponse<Vec<Address>>, ClientError> {
        let call = post(&["verifications", "batch"]).json(&json!({ "addresses": addresses }))?;
        let payload = self.client.fire(call).await?;
        decode(payload.map(unwrap_batch))
    }

    /// Returns candidate corrections for an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn suggest_addresses(
        &self,
        address: impl Into<AddressInput>,
    ) -> Result<AddressResponse<Value>, ClientError> {
        let call = post(&["suggestions"]).json(&json!({ "address": address.into() }))?;
        self.client.send(call).await
    }

    /// Splits a freeform address into its components.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn parse_address(
        &self,
        address: &str,
    ) -> Result<AddressResponse<Value>, ClientError> {
        let call = post(&["parses"]).json(&json!({ "address": address }))?;
        self.client.send(call).await
    }

    /// Looks up the city and state of a postal or ZIP code.
    ///
    /// # Errors
    ///
    /// Returns an error if the address key is missing or the request fails.
    pub async fn lookup_city_state(
        &self,
        postal_or_zip: &str,
    ) -> Result<AddressResponse<CityState>, ClientError> {
        let call = post(&["city_states"]).json(&json!({ "postalOrZip": postal_or_zip }))?;
        self.client.send(call).await
    }
}

/// `(source, target)` renames for completion previews.
const PREVIEW_FIELDS: &[(&str, &str)] = &[
    ("address", "line1"),
    ("city", "city"),
    ("prov", "provinceOrState"),
];

/// `(source, target)` renames for full completions.
const COMPLETION_FIELDS: &[(&str, &str)] = &[
    ("address", "line1"),
    ("city", "city"),
    ("prov", "provinceOrState"),
    ("pc", "postalOrZip"),
    ("country", "country"),
];

/// POST to an address route with proper casing turned on.
fn post(segments: &[&str]) -> Call {
    Call::post(KeyKind::Addr, join_route(ADDRESS_ROUTE, segments)).query("properCase", true)
}

/// Replaces each `data[]` item with its `inner` object, renamed per `fields`.
fn reshape_list(mut payload: Value, inner: &str, fields: &[(&str, &str)]) -> Value {
    if let Some(Value::Array(items)) = payload.get_mut("data") {
        for item in items.iter_mut() {
            let source = item.get(inner).cloned().unwrap_or(Value::Null);
            *item = rename_fields(&source, fields);
        }
    }
    payload
}

fn rename_fields(source: &Value, fields: &[(&str, &str)]) -> Value {
    let mut out = Map::new();
    for (from, to) in fields {
        match source.get(*from) {
            None | Some(Value::Null) => {}
            Some(value) => {
                out.insert((*to).to_string(), value.clone());
            }
        }
    }
    Value::Object(out)
}

/// Lifts `data.results[].verifiedAddress` into `data`.
///
/// A result without a verified address keeps its slot as an address holding
/// only the result's `errors`.
fn unwrap_batch(mut payload: Value) -> Value {
    let results = payload
        .get("data")
        .and_then(|d| d.get("results"))
        .and_then(Value::as_array)
        .map(|results| results.iter().map(batch_entry).collect::<Vec<_>>());
    if let (Some(results), Some(object)) = (results, payload.as_object_mut()) {
        object.insert("data".to_string(), Value::Array(results));
    }
    payload
}

fn batch_entry(result: &Value) -> Value {
    if let Some(address @ Value::Object(_)) = result.get("verifiedAddress") {
        return address.clone();
    }
    let mut out = Map::new();
    if let Some(errors) = result.get("errors").filter(|e| !e.is_null()) {
        out.insert("errors".to_string(), errors.clone());
    }
    Value::Object(out)
}

//! HTTP client implementation.
//!
//! Provides [`PostGrid`], the façade every resource handle borrows, and the
//! single dispatch routine they all go through.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::case::camelize_keys;
use super::config::{ClientConfig, KeyKind, CLIENT_VERSION};
use super::error::ClientError;
use super::form::MultipartForm;
use crate::error::PostGridError;
use crate::resources::{
    AddressApi, BankAccountApi, CheckApi, ContactApi, LetterApi, PostcardApi, TemplateApi,
    WebhookApi,
};
use crate::types::{Webhook, WebhookCreate};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the client version.
pub const CLIENT_VERSION_HEADER: &str = "X-PostGrid-Client-Ver";

/// Header carrying an idempotency key on create calls.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Request body.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON body, sent with `Content-Type: application/json`.
    Json(Value),
    /// Multipart body; the content type carries the boundary.
    Form(MultipartForm),
}

/// A single outbound call: method, route, key and payload.
#[derive(Debug, Clone)]
pub struct Call {
    method: Method,
    path: String,
    key: KeyKind,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl Call {
    /// Creates a call with the given method.
    #[must_use]
    pub fn new(method: Method, key: KeyKind, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            key,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET call.
    #[must_use]
    pub fn get(key: KeyKind, path: impl Into<String>) -> Self {
        Self::new(Method::GET, key, path)
    }

    /// Creates a POST call.
    #[must_use]
    pub fn post(key: KeyKind, path: impl Into<String>) -> Self {
        Self::new(Method::POST, key, path)
    }

    /// Creates a DELETE call.
    #[must_use]
    pub fn delete(key: KeyKind, path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, key, path)
    }

    /// Adds an extra header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        let value =
            serde_json::to_value(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Sets a multipart body.
    #[must_use]
    pub fn form(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the key kind the call needs.
    #[must_use]
    pub fn key(&self) -> KeyKind {
        self.key
    }

    /// Returns the query parameters in order.
    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}

/// PostGrid API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PostGrid {
    config: ClientConfig,
    http: reqwest::Client,
}

impl PostGrid {
    /// Creates a new client with the given configuration.
    ///
    /// No webhook is registered; use [`PostGrid::connect`] for that.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CLIENT_VERSION_HEADER,
            HeaderValue::from_static(CLIENT_VERSION),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a client and registers the configured webhook, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created or the webhook
    /// registration fails.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Self::new(config)?;
        client.register_webhook().await?;
        Ok(client)
    }

    /// Creates a client from `POSTGRID_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Registers the webhook from the configuration.
    ///
    /// Returns `None` when no webhook is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if PostGrid rejects the webhook.
    pub async fn register_webhook(&self) -> Result<Option<Webhook>, ClientError> {
        let Some(registration) = self.config.webhook.clone() else {
            return Ok(None);
        };

        let webhook = self
            .webhooks()
            .create(&WebhookCreate {
                url: registration.url,
                secret: registration.secret,
                enabled_events: registration.enabled_events,
                ..Default::default()
            })
            .await?;
        info!(id = %webhook.id, url = %webhook.url, "registered PostGrid webhook");
        Ok(Some(webhook))
    }

    /// Contacts resource.
    #[must_use]
    pub fn contacts(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    /// Templates resource.
    #[must_use]
    pub fn templates(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }

    /// Letters resource.
    #[must_use]
    pub fn letters(&self) -> LetterApi<'_> {
        LetterApi::new(self)
    }

    /// Postcards resource.
    #[must_use]
    pub fn postcards(&self) -> PostcardApi<'_> {
        PostcardApi::new(self)
    }

    /// Checks resource.
    #[must_use]
    pub fn checks(&self) -> CheckApi<'_> {
        CheckApi::new(self)
    }

    /// Bank accounts resource.
    #[must_use]
    pub fn bank_accounts(&self) -> BankAccountApi<'_> {
        BankAccountApi::new(self)
    }

    /// Webhooks resource.
    #[must_use]
    pub fn webhooks(&self) -> WebhookApi<'_> {
        WebhookApi::new(self)
    }

    /// Address verification resource.
    #[must_use]
    pub fn addresses(&self) -> AddressApi<'_> {
        AddressApi::new(self)
    }

    /// Returns the API key of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if the key is not configured.
    pub fn api_key(&self, kind: KeyKind) -> Result<&str, ClientError> {
        self.config
            .api_keys
            .get(kind)
            .ok_or(ClientError::MissingApiKey(kind))
    }

    /// Builds the full URL for a route path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fires a call and returns the camelCased response payload.
    ///
    /// The payload is `None` when the response body is not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] without touching the network
    /// if the key is absent, [`ClientError::Api`] for any status >= 400 or a
    /// payload carrying an `error` object, and transport errors otherwise.
    pub async fn fire(&self, call: Call) -> Result<Option<Value>, ClientError> {
        let api_key = self.api_key(call.key)?;
        let url = self.url(&call.path);

        let mut request = self
            .http
            .request(call.method.clone(), &url)
            .header(API_KEY_HEADER, api_key);
        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        request = match call.body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Form(form)) => request.multipart(form.into_reqwest()?),
            None => request,
        };

        debug!(method = %call.method, path = %call.path, "dispatching PostGrid request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let payload = serde_json::from_str::<Value>(&body).ok().map(camelize_keys);
        debug!(
            method = %call.method,
            path = %call.path,
            status = status.as_u16(),
            "PostGrid responded"
        );

        if status.is_client_error() || status.is_server_error() {
            let error = payload
                .as_ref()
                .and_then(error_payload)
                .unwrap_or_else(|| PostGridError::new(format!("http_{}", status.as_u16()), body));
            warn!(status = status.as_u16(), kind = %error.kind, "PostGrid request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                error,
            });
        }

        if let Some(error) = payload.as_ref().and_then(error_payload) {
            return Err(ClientError::Api {
                status: status.as_u16(),
                error,
            });
        }

        Ok(payload)
    }

    /// Fires a call and deserializes the response payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, call: Call) -> Result<T, ClientError> {
        let payload = self.fire(call).await?;
        decode(payload)
    }
}

/// Deserializes a response payload.
pub(crate) fn decode<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, ClientError> {
    let payload = payload
        .ok_or_else(|| ClientError::Deserialization("response body is not JSON".to_string()))?;
    serde_json::from_value(payload).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Extracts PostGrid's `error` field from a payload.
fn error_payload(payload: &Value) -> Option<PostGridError> {
    match payload.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(PostGridError::new("api", message.clone())),
        other => serde_json::from_value(other.clone()).ok(),
    }
}

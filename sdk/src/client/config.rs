//! Client configuration.
//!
//! Provides the API keys, host and webhook registration settings for the
//! HTTP client.

use std::fmt;
use std::time::Duration;

/// Default PostGrid API host.
pub const DEFAULT_HOST: &str = "api.postgrid.com";

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://api.postgrid.com";

/// Version reported in the `X-PostGrid-Client-Ver` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the print-mail API key.
pub const ENV_MAIL_API_KEY: &str = "POSTGRID_MAIL_API_KEY";

/// Environment variable holding the address verification API key.
pub const ENV_ADDR_API_KEY: &str = "POSTGRID_ADDR_API_KEY";

/// Legacy environment variable holding a single print-mail API key.
pub const ENV_LEGACY_API_KEY: &str = "POSTGRID_API_KEY";

/// Environment variable overriding the API host.
pub const ENV_HOST: &str = "POSTGRID_HOST";

/// Environment variable holding the webhook URL to register.
pub const ENV_WEBHOOK_URL: &str = "POSTGRID_WEBHOOK_URL";

/// Environment variable holding the webhook signing secret.
pub const ENV_WEBHOOK_SECRET: &str = "POSTGRID_WEBHOOK_SECRET";

/// Environment variable holding the comma separated webhook events.
pub const ENV_WEBHOOK_EVENTS: &str = "POSTGRID_WEBHOOK_EVENTS";

/// Which of the two PostGrid API keys a call needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Print-mail key (contacts, letters, checks, ...).
    Mail,
    /// Address verification key.
    Addr,
}

impl KeyKind {
    /// Message reported when this key is missing.
    #[must_use]
    pub const fn missing_message(self) -> &'static str {
        match self {
            Self::Mail => "Missing PostGrid Print-Mail API Key!",
            Self::Addr => "Missing PostGrid Address API Key!",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mail => write!(f, "print-mail"),
            Self::Addr => write!(f, "address"),
        }
    }
}

/// PostGrid API keys.
///
/// PostGrid issues separate keys for print-mail and address verification;
/// an account may hold either or both.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    /// Print-mail API key.
    pub mail: Option<String>,

    /// Address verification API key.
    pub addr: Option<String>,
}

impl ApiKeys {
    /// Creates an empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the print-mail key.
    #[must_use]
    pub fn with_mail(mut self, key: impl Into<String>) -> Self {
        self.mail = Some(key.into());
        self
    }

    /// Sets the address verification key.
    #[must_use]
    pub fn with_addr(mut self, key: impl Into<String>) -> Self {
        self.addr = Some(key.into());
        self
    }

    /// Returns the key of the given kind, ignoring empty strings.
    #[must_use]
    pub fn get(&self, kind: KeyKind) -> Option<&str> {
        let key = match kind {
            KeyKind::Mail => self.mail.as_deref(),
            KeyKind::Addr => self.addr.as_deref(),
        };
        key.filter(|k| !k.is_empty())
    }
}

// A single key is a print-mail key.
impl From<&str> for ApiKeys {
    fn from(key: &str) -> Self {
        Self::new().with_mail(key)
    }
}

impl From<String> for ApiKeys {
    fn from(key: String) -> Self {
        Self::new().with_mail(key)
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("ApiKeys")
            .field("mail", &redact(&self.mail))
            .field("addr", &redact(&self.addr))
            .finish()
    }
}

/// Webhook to register when the client connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRegistration {
    /// Endpoint PostGrid should call.
    pub url: String,

    /// Signing secret.
    pub secret: Option<String>,

    /// Events to enable, e.g. `letter.created`.
    pub enabled_events: Vec<String>,
}

impl WebhookRegistration {
    /// Creates a registration for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: None,
            enabled_events: Vec::new(),
        }
    }

    /// Sets the signing secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Sets the enabled events.
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_events = events.into_iter().map(Into::into).collect();
        self
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// API keys.
    pub api_keys: ApiKeys,

    /// User agent string.
    pub user_agent: String,

    /// Optional request timeout. None leaves reqwest's default.
    pub timeout: Option<Duration>,

    /// Webhook registered by [`PostGrid::connect`](super::PostGrid::connect).
    pub webhook: Option<WebhookRegistration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_keys: ApiKeys::default(),
            user_agent: format!("postgrid-sdk/{}", CLIENT_VERSION),
            timeout: None,
            webhook: None,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given API keys.
    #[must_use]
    pub fn new(api_keys: impl Into<ApiKeys>) -> Self {
        Self {
            api_keys: api_keys.into(),
            ..Default::default()
        }
    }

    /// Loads the configuration from `POSTGRID_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_keys = ApiKeys {
            mail: non_empty(ENV_MAIL_API_KEY).or_else(|| non_empty(ENV_LEGACY_API_KEY)),
            addr: non_empty(ENV_ADDR_API_KEY),
        };

        let mut config = Self::new(api_keys);
        if let Some(host) = non_empty(ENV_HOST) {
            config = config.with_host(host);
        }

        if let Some(url) = non_empty(ENV_WEBHOOK_URL) {
            let mut webhook = WebhookRegistration::new(url);
            if let Some(secret) = non_empty(ENV_WEBHOOK_SECRET) {
                webhook = webhook.with_secret(secret);
            }
            if let Some(events) = non_empty(ENV_WEBHOOK_EVENTS) {
                webhook = webhook.with_events(
                    events
                        .split(',')
                        .map(str::trim)
                        .filter(|e| !e.is_empty())
                        .map(str::to_string),
                );
            }
            config = config.with_webhook(webhook);
        }

        config
    }

    /// Sets the API host, e.g. `api.postgrid.com`. HTTPS is implied.
    #[must_use]
    pub fn with_host(mut self, host: impl AsRef<str>) -> Self {
        self.base_url = format!("https://{}", host.as_ref().trim_matches('/'));
        self
    }

    /// Sets the full base URL, scheme included.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API keys.
    #[must_use]
    pub fn with_api_keys(mut self, api_keys: impl Into<ApiKeys>) -> Self {
        self.api_keys = api_keys.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the webhook registered on connect.
    #[must_use]
    pub fn with_webhook(mut self, webhook: WebhookRegistration) -> Self {
        self.webhook = Some(webhook);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), super::error::ClientError> {
        if self.base_url.is_empty() {
            return Err(super::error::ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(super::error::ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if let Some(webhook) = &self.webhook {
            if webhook.url.is_empty() {
                return Err(super::error::ClientError::InvalidConfig(
                    "webhook url cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

//! Resource handles.
//!
//! Each handle borrows the [`PostGrid`](crate::PostGrid) client and maps one
//! PostGrid resource onto typed calls through the shared dispatcher.

pub mod address;
pub mod bank_account;
pub mod check;
pub mod contact;
pub mod letter;
pub mod postcard;
pub mod template;
pub mod webhook;

pub use address::AddressApi;
pub use bank_account::BankAccountApi;
pub use check::CheckApi;
pub use contact::ContactApi;
pub use letter::LetterApi;
pub use postcard::PostcardApi;
pub use template::TemplateApi;
pub use webhook::WebhookApi;

use crate::client::http::IDEMPOTENCY_KEY_HEADER;
use crate::client::Call;

/// Route prefix of the print-mail API.
pub const MAIL_ROUTE: &str = "print-mail/v1";

/// Route prefix of the address verification API.
pub const ADDRESS_ROUTE: &str = "v1/addver";

/// Page size used when none is given.
pub const DEFAULT_PAGE_LIMIT: u32 = 40;

/// Keys flattened into `key[sub]` fields in mail piece forms.
pub(crate) const MAIL_PIECE_NESTED_KEYS: &[&str] = &["to", "from", "mergeVariables", "metadata"];

/// Options for create calls on mail pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Sent as `Idempotency-Key` so retried creates are not duplicated.
    pub idempotency_key: Option<String>,
}

impl CreateOptions {
    /// Creates options with an idempotency key.
    #[must_use]
    pub fn idempotent(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }

    pub(crate) fn apply(&self, call: Call) -> Call {
        match &self.idempotency_key {
            Some(key) => call.header(IDEMPOTENCY_KEY_HEADER, key.clone()),
            None => call,
        }
    }
}

/// Appends the `skip`/`limit` paging parameters.
///
/// A missing or zero limit falls back to [`DEFAULT_PAGE_LIMIT`].
pub(crate) fn paged(call: Call, limit: Option<u32>, skip: Option<u32>) -> Call {
    let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_LIMIT);
    call.query("skip", skip.unwrap_or(0)).query("limit", limit)
}

/// Appends path segments to a route prefix.
pub(crate) fn join_route(prefix: &str, segments: &[&str]) -> String {
    let mut path = prefix.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Builds a print-mail route from path segments.
pub(crate) fn mail_path(segments: &[&str]) -> String {
    join_route(MAIL_ROUTE, segments)
}

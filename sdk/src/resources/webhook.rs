//! Webhooks resource.

use super::{mail_path, paged};
use crate::client::{Call, ClientError, KeyKind, PostGrid};
use crate::types::{List, Webhook, WebhookCreate, WebhookInvocation};

/// Handle for `print-mail/v1/webhooks`.
#[derive(Debug, Clone, Copy)]
pub struct WebhookApi<'a> {
    client: &'a PostGrid,
}

impl<'a> WebhookApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<Webhook, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["webhooks", id])))
            .await
    }

    /// Lists the account's webhooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Webhook>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["webhooks"])), limit, skip);
        self.client.send(call).await
    }

    /// Lists the delivery attempts of a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn invocations(
        &self,
        id: &str,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<WebhookInvocation>, ClientError> {
        let call = paged(
            Call::get(KeyKind::Mail, mail_path(&["webhooks", id, "invocations"])),
            limit,
            skip,
        );
        self.client.send(call).await
    }

    /// Creates a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects it.
    pub async fn create(&self, webhook: &WebhookCreate) -> Result<Webhook, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["webhooks"])).json(webhook)?;
        self.client.send(call).await
    }

    /// Updates an existing webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects it.
    pub async fn update(&self, id: &str, webhook: &WebhookCreate) -> Result<Webhook, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["webhooks", id])).json(webhook)?;
        self.client.send(call).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<Webhook, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["webhooks", id])))
            .await
    }
}

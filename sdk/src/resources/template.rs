//! Templates resource.

use super::{mail_path, paged};
use crate::client::{Call, ClientError, KeyKind, PostGrid};
use crate::types::{List, Template, TemplateCreate};

/// Handle for `print-mail/v1/templates`.
#[derive(Debug, Clone, Copy)]
pub struct TemplateApi<'a> {
    client: &'a PostGrid,
}

impl<'a> TemplateApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a template by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<Template, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["templates", id])))
            .await
    }

    /// Lists templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Template>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["templates"])), limit, skip);
        self.client.send(call).await
    }

    /// Creates a new template.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects it.
    pub async fn create(&self, template: &TemplateCreate) -> Result<Template, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["templates"])).json(template)?;
        self.client.send(call).await
    }

    /// Updates an existing template.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing, the template does not exist
    /// or PostGrid rejects the update.
    pub async fn update(
        &self,
        id: &str,
        template: &TemplateCreate,
    ) -> Result<Template, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["templates", id])).json(template)?;
        self.client.send(call).await
    }

    /// Deletes a template.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<Template, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["templates", id])))
            .await
    }
}

//! Contacts resource.

use super::{mail_path, paged};
use crate::client::{Call, ClientError, KeyKind, PostGrid};
use crate::types::{Contact, ContactCreate, List};

/// Handle for `print-mail/v1/contacts`.
#[derive(Debug, Clone, Copy)]
pub struct ContactApi<'a> {
    client: &'a PostGrid,
}

impl<'a> ContactApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a contact by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing, the contact does not exist or
    /// the request fails.
    pub async fn get(&self, id: &str) -> Result<Contact, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["contacts", id])))
            .await
    }

    /// Lists contacts, `limit` (default 40) at a time from `skip`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Contact>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["contacts"])), limit, skip);
        self.client.send(call).await
    }

    /// Creates a contact, or updates the description of an identical one.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects the contact.
    pub async fn create(&self, contact: &ContactCreate) -> Result<Contact, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["contacts"])).json(contact)?;
        self.client.send(call).await
    }

    /// Deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing, the contact does not exist or
    /// the request fails.
    pub async fn delete(&self, id: &str) -> Result<Contact, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["contacts", id])))
            .await
    }
}

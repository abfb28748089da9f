//! Bank accounts resource.

use super::{mail_path, paged};
use crate::client::{Call, ClientError, KeyKind, MultipartForm, PostGrid};
use crate::types::{BankAccount, BankAccountCreate, List};

/// Keys flattened into `key[sub]` fields in bank account forms.
const NESTED_KEYS: &[&str] = &["metadata"];

/// Handle for `print-mail/v1/bank_accounts`.
#[derive(Debug, Clone, Copy)]
pub struct BankAccountApi<'a> {
    client: &'a PostGrid,
}

impl<'a> BankAccountApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a bank account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<BankAccount, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["bank_accounts", id])))
            .await
    }

    /// Lists bank accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<BankAccount>, ClientError> {
        let call = paged(
            Call::get(KeyKind::Mail, mail_path(&["bank_accounts"])),
            limit,
            skip,
        );
        self.client.send(call).await
    }

    /// Creates a bank account.
    ///
    /// Always sent as multipart form data. A signature image given as a path
    /// is read from disk first.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing, the signature image cannot be
    /// read, or PostGrid rejects the account.
    pub async fn create(&self, account: &BankAccountCreate) -> Result<BankAccount, ClientError> {
        // fail on a missing key before touching the filesystem
        self.client.api_key(KeyKind::Mail)?;

        let mut form = MultipartForm::encode(account, NESTED_KEYS)?;
        if let Some(image) = &account.signature_image {
            form = form.file("signatureImage", image.to_file_part().await?);
        }

        let call = Call::post(KeyKind::Mail, mail_path(&["bank_accounts"])).form(form);
        self.client.send(call).await
    }

    /// Deletes a bank account.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<BankAccount, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["bank_accounts", id])))
            .await
    }
}

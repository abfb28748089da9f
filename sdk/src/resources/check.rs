//! Checks resource. PostGrid routes these under `cheques`.

use super::{mail_path, paged, CreateOptions, MAIL_PIECE_NESTED_KEYS};
use crate::client::{Call, ClientError, FilePart, KeyKind, MultipartForm, PostGrid};
use crate::types::{Check, CheckCreate, List};

/// Handle for `print-mail/v1/cheques`.
#[derive(Debug, Clone, Copy)]
pub struct CheckApi<'a> {
    client: &'a PostGrid,
}

impl<'a> CheckApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a check by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<Check, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["cheques", id])))
            .await
    }

    /// Lists checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Check>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["cheques"])), limit, skip);
        self.client.send(call).await
    }

    /// Creates a check.
    ///
    /// Always sent as multipart form data; an attached letter PDF given as
    /// bytes becomes the `letterPDF` file part.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects the check.
    pub async fn create(
        &self,
        check: &CheckCreate,
        options: &CreateOptions,
    ) -> Result<Check, ClientError> {
        let mut form = MultipartForm::encode(check, MAIL_PIECE_NESTED_KEYS)?;
        if let Some(pdf) = check.upload() {
            form = form.file("letterPDF", FilePart::pdf(pdf.to_vec()));
        }

        let call = Call::post(KeyKind::Mail, mail_path(&["cheques"])).form(form);
        self.client.send(options.apply(call)).await
    }

    /// Moves a test check to its next status.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn progress(&self, id: &str) -> Result<Check, ClientError> {
        self.client
            .send(Call::post(
                KeyKind::Mail,
                mail_path(&["cheques", id, "progressions"]),
            ))
            .await
    }

    /// Cancels and deletes a check.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<Check, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["cheques", id])))
            .await
    }
}

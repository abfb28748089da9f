//! Postcards resource.

use super::{mail_path, paged, CreateOptions, MAIL_PIECE_NESTED_KEYS};
use crate::client::{Call, ClientError, FilePart, KeyKind, MultipartForm, PostGrid};
use crate::types::{List, Postcard, PostcardCreate};

/// Handle for `print-mail/v1/postcards`.
#[derive(Debug, Clone, Copy)]
pub struct PostcardApi<'a> {
    client: &'a PostGrid,
}

impl<'a> PostcardApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a postcard by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<Postcard, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["postcards", id])))
            .await
    }

    /// Lists postcards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Postcard>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["postcards"])), limit, skip);
        self.client.send(call).await
    }

    /// Creates a postcard. A PDF given as bytes is uploaded as multipart.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects it.
    pub async fn create(
        &self,
        postcard: &PostcardCreate,
        options: &CreateOptions,
    ) -> Result<Postcard, ClientError> {
        let call = Call::post(KeyKind::Mail, mail_path(&["postcards"]));
        let call = match postcard.upload() {
            Some(pdf) => call.form(
                MultipartForm::encode(postcard, MAIL_PIECE_NESTED_KEYS)?
                    .file("pdf", FilePart::pdf(pdf.to_vec())),
            ),
            None => call.json(postcard)?,
        };
        self.client.send(options.apply(call)).await
    }

    /// Moves a test postcard to its next status.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn progress(&self, id: &str) -> Result<Postcard, ClientError> {
        self.client
            .send(Call::post(
                KeyKind::Mail,
                mail_path(&["postcards", id, "progressions"]),
            ))
            .await
    }

    /// Cancels and deletes a postcard.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<Postcard, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["postcards", id])))
            .await
    }
}

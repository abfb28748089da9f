//! Letters resource.

use tracing::debug;

use super::{mail_path, paged, CreateOptions, MAIL_PIECE_NESTED_KEYS};
use crate::client::{Call, ClientError, FilePart, KeyKind, MultipartForm, PostGrid};
use crate::types::{Letter, LetterCreate, List};

/// Handle for `print-mail/v1/letters`.
#[derive(Debug, Clone, Copy)]
pub struct LetterApi<'a> {
    client: &'a PostGrid,
}

impl<'a> LetterApi<'a> {
    pub(crate) fn new(client: &'a PostGrid) -> Self {
        Self { client }
    }

    /// Gets a letter by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn get(&self, id: &str) -> Result<Letter, ClientError> {
        self.client
            .send(Call::get(KeyKind::Mail, mail_path(&["letters", id])))
            .await
    }

    /// Lists letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn list(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<List<Letter>, ClientError> {
        let call = paged(Call::get(KeyKind::Mail, mail_path(&["letters"])), limit, skip);
        self.client.send(call).await
    }

    /// Creates a letter.
    ///
    /// Unset print options default to black and white, single sided, with
    /// the address on an inserted blank page. A PDF given as bytes is
    /// uploaded as multipart form data; everything else is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or PostGrid rejects the letter.
    pub async fn create(
        &self,
        letter: LetterCreate,
        options: &CreateOptions,
    ) -> Result<Letter, ClientError> {
        let letter = letter.with_defaults();
        let call = Call::post(KeyKind::Mail, mail_path(&["letters"]));

        let call = match letter.upload() {
            Some(pdf) => {
                debug!(bytes = pdf.len(), "uploading letter PDF");
                let form = MultipartForm::encode(&letter, MAIL_PIECE_NESTED_KEYS)?
                    .file("pdf", FilePart::pdf(pdf.to_vec()));
                call.form(form)
            }
            None => call.json(&letter)?,
        };

        self.client.send(options.apply(call)).await
    }

    /// Moves a test letter to its next status, e.g. to exercise webhooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing, the letter is live or the
    /// request fails.
    pub async fn progress(&self, id: &str) -> Result<Letter, ClientError> {
        self.client
            .send(Call::post(
                KeyKind::Mail,
                mail_path(&["letters", id, "progressions"]),
            ))
            .await
    }

    /// Cancels and deletes a letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the request fails.
    pub async fn delete(&self, id: &str) -> Result<Letter, ClientError> {
        self.client
            .send(Call::delete(KeyKind::Mail, mail_path(&["letters", id])))
            .await
    }
}

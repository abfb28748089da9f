//! Uploadable documents: PDFs for mail pieces and signature images for
//! bank accounts.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::client::form::{FilePart, OCTET_STREAM_MIME};
use crate::client::ClientError;

/// A PDF given either as a URL PostGrid fetches itself, or as raw bytes.
///
/// Raw bytes force the create call into a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Publicly reachable URL of the PDF.
    Url(String),
    /// PDF contents.
    Bytes(Vec<u8>),
}

impl Document {
    /// Returns the raw bytes if the document is an upload.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Url(_) => None,
        }
    }

    /// Returns true if the document must be uploaded.
    #[must_use]
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }
}

// Bytes never go into JSON; they travel as a file part.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Url(url) => serializer.serialize_str(url),
            Self::Bytes(_) => serializer.serialize_none(),
        }
    }
}

impl From<&str> for Document {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for Document {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Vec<u8>> for Document {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Signature image for a bank account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureImage {
    /// Local file, read when the account is created.
    Path(PathBuf),
    /// In-memory image.
    Bytes {
        /// Image contents.
        data: Vec<u8>,
        /// Filename reported to PostGrid.
        filename: String,
        /// MIME type, e.g. `image/png`.
        content_type: String,
    },
}

impl SignatureImage {
    /// Creates a signature image from a local file.
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Creates an in-memory signature image.
    #[must_use]
    pub fn bytes(
        data: Vec<u8>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self::Bytes {
            data,
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }

    /// Loads the image into a multipart file part.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::File`] if a local file cannot be read.
    pub async fn to_file_part(&self) -> Result<FilePart, ClientError> {
        match self {
            Self::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| ClientError::File(format!("{}: {}", path.display(), e)))?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "signature".to_string());
                Ok(FilePart::new(bytes, filename, mime_for(path)))
            }
            Self::Bytes {
                data,
                filename,
                content_type,
            } => Ok(FilePart::new(data.clone(), filename.clone(), content_type.clone())),
        }
    }
}

/// Guesses an image MIME type from the file extension.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => OCTET_STREAM_MIME,
    }
}
